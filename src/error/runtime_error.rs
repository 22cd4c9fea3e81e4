#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing an expression tree.
pub enum RuntimeError {
    /// A binary node's operator token has no registered handler.
    UnknownBinaryOperator {
        /// The unregistered operator token.
        token: String,
    },
    /// A unary node's function token has no registered handler.
    UnknownUnaryOperator {
        /// The unregistered function token.
        token: String,
    },
    /// A leaf node's token is not a well-formed numeric literal.
    MalformedLiteral {
        /// The offending lexeme.
        token: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBinaryOperator { token } => {
                write!(f, "Unknown binary operator '{token}'.")
            },

            Self::UnknownUnaryOperator { token } => {
                write!(f, "Unknown unary operator '{token}'.")
            },

            Self::MalformedLiteral { token } => {
                write!(f, "Unknown expression type: '{token}' is not a numeric literal.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
