//! Quoted string and backtick symbol scanning.

use super::{TokenKind, Tokenizer};

impl<'a> Tokenizer<'a> {
    /// Scan a `"…"` or `'…'` literal; the opening quote is already consumed.
    ///
    /// Escapes are skipped, not decoded, and the literal may span lines. Running out of input before the closing
    /// quote yields an `Invalid` token covering the rest of the source.
    pub(super) fn scan_string(&mut self, quote: char) -> TokenKind {
        if self.scan_delimited(quote) {
            TokenKind::String
        } else {
            TokenKind::Invalid
        }
    }

    /// Scan a `` `…` `` symbol; the opening backtick is already consumed.
    pub(super) fn scan_quoted_symbol(&mut self) -> TokenKind {
        if self.scan_delimited('`') {
            TokenKind::Symbol
        } else {
            TokenKind::Invalid
        }
    }

    /// Consume up to and including the closing `delimiter`. Returns `false` if the input ends first.
    fn scan_delimited(&mut self, delimiter: char) -> bool {
        while let Some(c) = self.advance() {
            if c == '\\' {
                if self.advance().is_none() {
                    return false;
                }
            } else if c == delimiter {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, tokenize};

    fn single(source: &str) -> (TokenKind, String) {
        let toks = tokenize(source);
        assert_eq!(toks.len(), 1, "expected one token for {source:?}, got {toks:?}");
        (toks[0].kind, toks[0].contents.clone())
    }

    #[test]
    fn test_quotes_are_kept() {
        assert_eq!(single("\"hi\""), (TokenKind::String, "\"hi\"".to_string()));
        assert_eq!(single("'hi'"), (TokenKind::String, "'hi'".to_string()));
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        assert_eq!(single(r#""a\"b""#).0, TokenKind::String);
        assert_eq!(single(r"'it\'s'").0, TokenKind::String);
    }

    #[test]
    fn test_multiline_string() {
        let (kind, text) = single("'one\ntwo'");
        assert_eq!(kind, TokenKind::String);
        assert_eq!(text, "'one\ntwo'");
    }

    #[test]
    fn test_unterminated_string_is_invalid() {
        assert_eq!(single("\"abc"), (TokenKind::Invalid, "\"abc".to_string()));
        assert_eq!(single("'abc\\").0, TokenKind::Invalid);
    }

    #[test]
    fn test_backtick_symbols() {
        assert_eq!(single("`my var`"), (TokenKind::Symbol, "`my var`".to_string()));
        assert_eq!(single("`if`").0, TokenKind::Symbol);
        assert_eq!(single("`open").0, TokenKind::Invalid);
    }
}
