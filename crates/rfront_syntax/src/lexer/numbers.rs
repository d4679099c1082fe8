//! Numeric literal scanning.
//!
//! Accepted shapes: `42`, `3.14`, `.5`, `5.`, `1e10`, `2.5e-3`, `0x1F`, each optionally followed by an `L`
//! (integer) or `i` (imaginary) suffix. Values are not decoded; the token keeps its source text.

use super::{TokenKind, Tokenizer};

impl<'a> Tokenizer<'a> {
    /// Scan a numeric literal whose first character (`first`, a digit or `.`) is already consumed.
    pub(super) fn scan_number(&mut self, first: char) -> TokenKind {
        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            self.consume_while(|c| c.is_ascii_hexdigit());
        } else {
            if first != '.' {
                self.consume_while(|c| c.is_ascii_digit());
                self.match_char('.');
            }
            self.consume_while(|c| c.is_ascii_digit());
            self.scan_exponent();
        }

        if matches!(self.peek(), Some('L' | 'i')) {
            self.advance();
        }
        TokenKind::Number
    }

    /// Consume `e`/`E`, an optional sign, and digits, but only if at least one digit follows.
    fn scan_exponent(&mut self) {
        if !matches!(self.peek(), Some('e' | 'E')) {
            return;
        }
        let digits_at = match self.peek_nth(1) {
            Some('+' | '-') => 2,
            _ => 1,
        };
        if !self.peek_nth(digits_at).is_some_and(|c| c.is_ascii_digit()) {
            return;
        }
        for _ in 0..digits_at {
            self.advance();
        }
        self.consume_while(|c| c.is_ascii_digit());
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, tokenize};

    fn number_texts(source: &str) -> Vec<String> {
        tokenize(source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.contents)
            .collect()
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(
            number_texts("42 3.14 .5 5. 1e10 2.5e-3 7E+2"),
            vec!["42", "3.14", ".5", "5.", "1e10", "2.5e-3", "7E+2"]
        );
    }

    #[test]
    fn test_hex_and_suffixes() {
        assert_eq!(number_texts("0x1F 0XffL 10L 2i"), vec!["0x1F", "0XffL", "10L", "2i"]);
    }

    #[test]
    fn test_dangling_exponent_is_not_consumed() {
        let toks = tokenize("1e");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].contents, "1");
        assert_eq!(toks[1].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_dot_symbol_is_not_a_number() {
        assert_eq!(tokenize(".x")[0].kind, TokenKind::Symbol);
    }
}
