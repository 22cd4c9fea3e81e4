use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::registry::{AngleUnit, Registry},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces expression trees against a registry under one angle unit.
///
/// Evaluation is a strict, eager post-order walk: both operands of a binary
/// node are computed before its handler runs, and every intermediate value
/// is an `f64`, so rounding behavior is uniform across the tree.
pub struct Evaluator<'a> {
    registry: &'a Registry,
    unit:     AngleUnit,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator borrowing `registry` for the duration of one
    /// evaluation call.
    #[must_use]
    pub const fn new(registry: &'a Registry, unit: AngleUnit) -> Self {
        Self { registry, unit }
    }

    /// Evaluates an expression tree to a numeric value.
    ///
    /// Dispatch follows the node variant:
    /// - `Binary`: the operator token is looked up in the operator table;
    ///   an unregistered token is [`RuntimeError::UnknownBinaryOperator`].
    /// - `Unary`: the function token is looked up in the function table; an
    ///   unregistered token is [`RuntimeError::UnknownUnaryOperator`].
    ///   Angle-sensitive handlers consult the session's unit.
    /// - `Literal`: the lexeme must be non-empty, digits with at most one
    ///   decimal point, and parse as `f64`; anything else is
    ///   [`RuntimeError::MalformedLiteral`].
    ///
    /// Lookups happen before operands are evaluated, so the outermost
    /// failure is the one reported.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal(lexeme) => Self::eval_literal(lexeme),

            Expr::Unary { op, operand } => {
                let handler =
                    self.registry
                        .function(op)
                        .ok_or_else(|| RuntimeError::UnknownUnaryOperator { token: op.clone() })?;

                let value = self.eval(operand)?;
                Ok(handler.apply(value, self.unit))
            },

            Expr::Binary { op, left, right } => {
                let operator =
                    self.registry
                        .operator(op)
                        .ok_or_else(|| RuntimeError::UnknownBinaryOperator { token: op.clone() })?;

                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Ok(operator.apply(lhs, rhs))
            },
        }
    }

    fn eval_literal(lexeme: &str) -> EvalResult<f64> {
        let well_formed = !lexeme.is_empty()
                          && lexeme.bytes().all(|b| b.is_ascii_digit() || b == b'.')
                          && lexeme.bytes().filter(|&b| b == b'.').count() <= 1;

        if !well_formed {
            return Err(RuntimeError::MalformedLiteral { token: lexeme.to_string() });
        }

        // A lone "." survives the shape check but is not a number.
        lexeme.parse()
              .map_err(|_| RuntimeError::MalformedLiteral { token: lexeme.to_string() })
    }
}
