use crate::{error::ParseError, interpreter::registry::Registry};

/// A minimal but meaningful unit of input text.
///
/// The tokenizer classifies everything it consumes as either a numeric
/// literal or a known symbol. Constant names are substituted here: a matched
/// constant is emitted as a `Number` carrying its decimal-string expansion,
/// so the parser never sees constants at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A numeric-literal lexeme: digits and at most one decimal point.
    Number(String),
    /// A registered token text: operator, function name, or parenthesis.
    Symbol(String),
}

/// A cursor over one (lowercased) input line.
///
/// The input is immutable; the cursor is a byte offset advanced by
/// [`Lexer::next_token`]. The parser peeks by saving the offset with
/// [`Lexer::mark`], reading a token, and restoring it with
/// [`Lexer::rewind`] — never by arithmetic on token lengths, which would be
/// wrong for substituted constants.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos:   usize,
}

impl<'a> Lexer<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Saves the current cursor position.
    #[must_use]
    pub const fn mark(&self) -> usize {
        self.pos
    }

    /// Restores a position previously returned by [`Lexer::mark`].
    pub fn rewind(&mut self, mark: usize) {
        self.pos = mark;
    }

    /// Reads the next token.
    ///
    /// Skips leading whitespace, then:
    /// - at end of input, yields `Ok(None)`;
    /// - a leading ASCII digit starts a numeric literal: digits and at most
    ///   one decimal point are consumed greedily, and a literal ending in a
    ///   bare trailing point is [`ParseError::TrailingDecimalPoint`];
    /// - otherwise the registry's token list is scanned longest-first and
    ///   the first text matching at the cursor is accepted. A constant name
    ///   becomes a `Number` carrying its substituted value; anything else a
    ///   `Symbol`.
    ///
    /// If nothing matches, the result is [`ParseError::UnrecognizedInput`]
    /// with the offending byte offset.
    pub fn next_token(&mut self, registry: &Registry) -> Result<Option<Token>, ParseError> {
        self.skip_whitespace();
        if self.pos == self.input.len() {
            return Ok(None);
        }

        let rest = &self.input[self.pos..];
        if rest.as_bytes()[0].is_ascii_digit() {
            return self.scan_number().map(Some);
        }

        for text in registry.tokens() {
            if rest.starts_with(text.as_str()) {
                self.pos += text.len();

                if let Some(value) = registry.constant(text) {
                    return Ok(Some(Token::Number(value.to_string())));
                }
                return Ok(Some(Token::Symbol(text.clone())));
            }
        }

        Err(ParseError::UnrecognizedInput { at: self.pos })
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn scan_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut seen_point = false;

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'0'..=b'9' => self.pos += 1,
                b'.' if !seen_point => {
                    seen_point = true;
                    self.pos += 1;
                },
                _ => break,
            }
        }

        let lexeme = &self.input[start..self.pos];
        if lexeme.ends_with('.') {
            return Err(ParseError::TrailingDecimalPoint { at: self.pos - 1 });
        }
        Ok(Token::Number(lexeme.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens(input: &str, registry: &Registry) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token(registry).unwrap() {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn longest_match_wins_over_prefixes() {
        let registry = Registry::with_builtins();
        // "asin" must not be misread as "a" fragments or a bare "sin".
        assert_eq!(all_tokens("asin sin", &registry),
                   vec![Token::Symbol("asin".to_string()),
                        Token::Symbol("sin".to_string())]);
    }

    #[test]
    fn constants_are_substituted_as_literals() {
        let registry = Registry::with_builtins();
        let tokens = all_tokens("2*pi", &registry);
        assert_eq!(tokens.len(), 3);
        match &tokens[2] {
            Token::Number(text) => assert!(text.starts_with("3.14159")),
            other => panic!("expected a substituted literal, found {other:?}"),
        }
    }

    #[test]
    fn literal_consumes_at_most_one_decimal_point() {
        let registry = Registry::with_builtins();
        let mut lexer = Lexer::new("1.25");
        assert_eq!(lexer.next_token(&registry).unwrap(),
                   Some(Token::Number("1.25".to_string())));

        // The second point does not belong to the literal.
        let mut lexer = Lexer::new("1.2.5");
        assert_eq!(lexer.next_token(&registry).unwrap(),
                   Some(Token::Number("1.2".to_string())));
    }

    #[test]
    fn dangling_decimal_point_is_rejected() {
        let registry = Registry::with_builtins();
        let mut lexer = Lexer::new("12.");
        assert_eq!(lexer.next_token(&registry),
                   Err(ParseError::TrailingDecimalPoint { at: 2 }));
    }

    #[test]
    fn unrecognized_input_reports_its_offset() {
        let registry = Registry::with_builtins();
        let mut lexer = Lexer::new("2 $ 3");
        lexer.next_token(&registry).unwrap();
        assert_eq!(lexer.next_token(&registry),
                   Err(ParseError::UnrecognizedInput { at: 2 }));
    }

    #[test]
    fn rewind_restores_a_marked_position() {
        let registry = Registry::with_builtins();
        let mut lexer = Lexer::new("1 + 2");
        lexer.next_token(&registry).unwrap();

        let mark = lexer.mark();
        assert_eq!(lexer.next_token(&registry).unwrap(),
                   Some(Token::Symbol("+".to_string())));
        lexer.rewind(mark);
        assert_eq!(lexer.next_token(&registry).unwrap(),
                   Some(Token::Symbol("+".to_string())));
    }
}
