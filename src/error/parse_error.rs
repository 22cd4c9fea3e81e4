#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing.
///
/// Offsets are byte positions into the lowercased input line.
pub enum ParseError {
    /// The characters at the cursor are neither a numeric literal nor any
    /// registered token text.
    UnrecognizedInput {
        /// The byte offset of the unrecognized characters.
        at: usize,
    },
    /// A numeric literal ended in a bare trailing decimal point.
    TrailingDecimalPoint {
        /// The byte offset of the dangling decimal point.
        at: usize,
    },
    /// The input ended where an operand was required.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where `)` was expected.
        at: usize,
    },
    /// Input was left over after a complete expression.
    TrailingInput {
        /// The byte offset at which the leftover input begins.
        at: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { at } => {
                write!(f, "Invalid syntax: unrecognized input at offset {at}.")
            },

            Self::TrailingDecimalPoint { at } => write!(f,
                                                        "Invalid syntax: numeric literal ends in a decimal point at offset {at}."),

            Self::UnexpectedEndOfInput => {
                write!(f, "Invalid syntax: unexpected end of input.")
            },

            Self::ExpectedClosingParen { at } => write!(f,
                                                        "Invalid syntax: expected closing parenthesis ')' at offset {at}."),

            Self::TrailingInput { at } => {
                write!(f, "Invalid syntax: unexpected trailing input at offset {at}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
