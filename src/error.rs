/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing or parsing an
/// input line: unrecognized characters, dangling decimal points, missing
/// closing parentheses, and leftover input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing an expression
/// tree: unregistered operator or function tokens and malformed literal
/// lexemes.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure taxonomy reported to hosts.
///
/// Every [`Error`] classifies into exactly one kind, with the most specific
/// reported: tokenizer and parser failures are all `InvalidSyntax`, while
/// evaluation failures distinguish which part of the tree was unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tokenizer could not classify the next characters, a literal ended
    /// in a bare decimal point, a parenthesized group was not closed, or
    /// input was left over after a complete expression.
    InvalidSyntax,
    /// A two-operand node's token has no registered binary handler.
    UnknownBinaryOperator,
    /// A one-operand node's token has no registered unary handler.
    UnknownUnaryOperator,
    /// A leaf node's token is not a well-formed numeric literal.
    UnknownExpressionType,
}

/// Any failure produced while evaluating an input line.
///
/// Wraps the phase-specific error enums and exposes the four-kind
/// classification through [`Error::kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression tree could not be reduced to a value.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies this failure into the reported taxonomy.
    ///
    /// # Examples
    /// ```
    /// use numex::{AngleUnit, ErrorKind, evaluate};
    ///
    /// let err = evaluate("(2 + 3", AngleUnit::Radians).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidSyntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::InvalidSyntax,
            Self::Runtime(e) => match e {
                RuntimeError::UnknownBinaryOperator { .. } => ErrorKind::UnknownBinaryOperator,
                RuntimeError::UnknownUnaryOperator { .. } => ErrorKind::UnknownUnaryOperator,
                RuntimeError::MalformedLiteral { .. } => ErrorKind::UnknownExpressionType,
            },
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
