use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        registry::Registry,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one complete expression from the lexer.
///
/// This is the entry point for parsing. It starts the precedence climb at
/// priority floor 0 and then requires the input to be exhausted; anything
/// left over is [`ParseError::TrailingInput`].
///
/// # Parameters
/// - `lexer`: Cursor over the (lowercased) input line.
/// - `registry`: Symbol tables consulted for token texts and priorities.
///
/// # Returns
/// The root of the parsed expression tree.
pub fn parse(lexer: &mut Lexer<'_>, registry: &Registry) -> ParseResult<Expr> {
    let expr = parse_binary(lexer, registry, 0)?;

    let mark = lexer.mark();
    match lexer.next_token(registry)? {
        None => Ok(expr),
        Some(_) => Err(ParseError::TrailingInput { at: mark }),
    }
}

/// Parses a simple (operand-position) expression.
///
/// Grammar:
/// ```text
///     simple := NUMBER
///             | "(" binary ")"
///             | SYMBOL simple
/// ```
/// A number is a leaf. A `(` recurses into a full sub-expression and
/// requires the matching `)`. Any other symbol is treated as a unary prefix
/// applied to a recursively parsed simple expression — this is how unary
/// `+`, `-`, and named functions bind their single operand, so `sin 2 + 3`
/// parses as `sin(2) + 3`, not `sin(2 + 3)`.
fn parse_simple(lexer: &mut Lexer<'_>, registry: &Registry) -> ParseResult<Expr> {
    match lexer.next_token(registry)? {
        None => Err(ParseError::UnexpectedEndOfInput),

        Some(Token::Number(lexeme)) => Ok(Expr::Literal(lexeme)),

        Some(Token::Symbol(symbol)) if symbol == "(" => {
            let inner = parse_binary(lexer, registry, 0)?;

            let at = lexer.mark();
            match lexer.next_token(registry)? {
                Some(Token::Symbol(closing)) if closing == ")" => Ok(inner),
                _ => Err(ParseError::ExpectedClosingParen { at }),
            }
        },

        Some(Token::Symbol(symbol)) => {
            let operand = parse_simple(lexer, registry)?;
            Ok(Expr::unary(symbol, operand))
        },
    }
}

/// Parses a chain of binary applications by precedence climbing.
///
/// Grammar: `binary := simple (OPERATOR binary)*`
///
/// After the left operand, tokens are peeked one at a time. A token whose
/// binary priority is at or below `min_priority` (numbers and non-operators
/// count as 0) is un-consumed by rewinding to the saved mark, and the
/// accumulated left operand is returned. Otherwise the right operand is
/// parsed with the *current* operator's priority as the floor, which makes
/// every operator left-associative: in `2 - 3 - 4` the second `-` fails the
/// `> floor` test and the recursion folds `(2 - 3)` first. The same
/// tie-break applies to `^`, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`.
fn parse_binary(lexer: &mut Lexer<'_>, registry: &Registry, min_priority: u8) -> ParseResult<Expr> {
    let mut left = parse_simple(lexer, registry)?;

    loop {
        let mark = lexer.mark();

        let op = match lexer.next_token(registry)? {
            Some(Token::Symbol(symbol)) if registry.priority(&symbol) > min_priority => symbol,
            _ => {
                lexer.rewind(mark);
                return Ok(left);
            },
        };

        let right = parse_binary(lexer, registry, registry.priority(&op))?;
        left = Expr::binary(op, left, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> ParseResult<Expr> {
        let registry = Registry::with_builtins();
        parse(&mut Lexer::new(input), &registry)
    }

    #[test]
    fn precedence_shapes_the_tree() {
        assert_eq!(parse_str("2+3*4").unwrap(),
                   Expr::binary("+",
                                Expr::literal("2"),
                                Expr::binary("*", Expr::literal("3"), Expr::literal("4"))));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse_str("(2+3)*4").unwrap(),
                   Expr::binary("*",
                                Expr::binary("+", Expr::literal("2"), Expr::literal("3")),
                                Expr::literal("4")));
    }

    #[test]
    fn equal_priorities_fold_to_the_left() {
        assert_eq!(parse_str("2-3-4").unwrap(),
                   Expr::binary("-",
                                Expr::binary("-", Expr::literal("2"), Expr::literal("3")),
                                Expr::literal("4")));
    }

    #[test]
    fn unary_prefix_binds_one_simple_expression() {
        assert_eq!(parse_str("sin 2 + 3").unwrap(),
                   Expr::binary("+",
                                Expr::unary("sin", Expr::literal("2")),
                                Expr::literal("3")));
    }

    #[test]
    fn missing_closing_paren_is_invalid_syntax() {
        assert_eq!(parse_str("(2+3"), Err(ParseError::ExpectedClosingParen { at: 4 }));
    }

    #[test]
    fn leftover_input_is_rejected() {
        assert!(matches!(parse_str("2 3"), Err(ParseError::TrailingInput { .. })));
        assert!(matches!(parse_str("2)"), Err(ParseError::TrailingInput { .. })));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_str("   "), Err(ParseError::UnexpectedEndOfInput));
    }
}
