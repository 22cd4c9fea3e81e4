//! # numex
//!
//! numex is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates a single line of text with support
//! for binary operators, unary prefix functions, named constants,
//! parentheses, and degree/radian-sensitive trigonometry.
//!
//! The operator, function, and constant vocabularies are extensible: a host
//! registers its own symbols on a [`Context`] before evaluating.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of an input line as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary, and binary node variants.
/// - Keeps node arity a property of the variant tag, so a malformed node
///   with an unexpected child count cannot be constructed.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression, and classifies each failure into
/// the four-kind taxonomy exposed through [`ErrorKind`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and offending tokens for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the symbol registry, tokenizer, parser, and
/// evaluator, and exposes the public API for evaluating input lines.
///
/// # Responsibilities
/// - Coordinates all core components: registry, lexer, parser, evaluator.
/// - Provides the [`Context`] session type and its registration calls.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Currently this holds the Lanczos approximation of the gamma function,
/// which backs the factorial builtin.
pub mod util;

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{registry::AngleUnit, Context},
};

/// Evaluates a single expression with the built-in vocabulary.
///
/// This is a convenience wrapper that creates a fresh [`Context`] per call.
/// Hosts that register custom operators, functions, or constants, or that
/// evaluate many lines, should create one [`Context`] and reuse it.
///
/// # Errors
/// Returns an [`Error`] if tokenizing, parsing, or evaluation fails; the
/// failure classifies into one of the [`ErrorKind`] variants.
///
/// # Examples
/// ```
/// use numex::{AngleUnit, evaluate};
///
/// let value = evaluate("2 + 3 * 4", AngleUnit::Radians).unwrap();
/// assert_eq!(value, 14.0);
///
/// // Unregistered symbols are an invalid-syntax failure.
/// assert!(evaluate("2 $ 3", AngleUnit::Radians).is_err());
/// ```
pub fn evaluate(input: &str, unit: AngleUnit) -> Result<f64, Error> {
    Context::new().eval(input, unit)
}
