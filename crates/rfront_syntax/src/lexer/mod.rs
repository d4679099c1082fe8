//! Tokenizer for rfront source text.
//!
//! Handles tokenization including:
//! - Whitespace runs and `#` comments (kept as trivia tokens, never dropped)
//! - Symbols, backtick-quoted symbols, and keywords
//! - Numeric and string literals
//! - Operators (including user-defined `%name%` operators) and punctuation
//! - Bracket tracking so `]]` is only produced when it closes a `[[`
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Position)
//! - `strings` - Quoted string and backtick symbol scanning
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - Tokenization never fails: malformed input becomes `Invalid` tokens and the stream continues.
//! - The token stream is lossless: the contents of all tokens concatenate back to the source.

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Position, Token, TokenKind, keyword_id};

use crate::ast::Span;
use rfront_core::lang::keywords::KeywordId;
use rfront_core::lang::operators::OperatorId;
use rfront_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKENIZER STATE
// ----------------------------------------------------------------------------
// Bracket tracking (simplified):
//
//   see '[' '[' → push '[['          see '[' → push '['
//   see ']' with '[[' on top and another ']' next → emit ']]', pop
//   see ']' otherwise → emit ']', pop if it closes the top
// ============================================================================

/// Lazy tokenizer over a borrowed source string.
///
/// Call [`Tokenizer::next_token`] repeatedly; once the input is exhausted every call returns an `End` token.
pub struct Tokenizer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    position: Position,
    /// Opening brackets not yet closed, innermost last.
    brackets: Vec<PunctuationId>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            position: Position::default(),
            brackets: Vec::new(),
        }
    }

    /// Produce the next token, or an `End` token once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        let start = self.current_pos;
        let start_position = self.position;

        let Some(c) = self.advance() else {
            return Token::end(start, start_position);
        };

        let kind = self.scan_token(c);
        Token::new(
            kind,
            &self.source[start..self.current_pos],
            Span::new(start, self.current_pos),
            start_position,
        )
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.current_pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.position.row += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self, c: char) -> TokenKind {
        match c {
            c if c.is_whitespace() => {
                self.consume_while(char::is_whitespace);
                TokenKind::Whitespace
            }

            '#' => {
                self.consume_while(|c| c != '\n');
                TokenKind::Comment
            }

            // Strings and quoted symbols
            '"' | '\'' => self.scan_string(c),
            '`' => self.scan_quoted_symbol(),

            // Numbers
            '0'..='9' => self.scan_number(c),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(c),

            // Symbols and keywords
            _ if is_symbol_start(c) => self.scan_symbol(c),

            // Lambda shorthand
            '\\' => TokenKind::Keyword(KeywordId::Function),

            // Brackets
            '(' => self.open_bracket(PunctuationId::LParen),
            ')' => self.close_bracket(PunctuationId::RParen),
            '{' => self.open_bracket(PunctuationId::LBrace),
            '}' => self.close_bracket(PunctuationId::RBrace),
            '[' => {
                if self.match_char('[') {
                    self.open_bracket(PunctuationId::LDoubleBracket)
                } else {
                    self.open_bracket(PunctuationId::LBracket)
                }
            }
            ']' => self.scan_right_bracket(),

            // Separators
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ';' => TokenKind::Punctuation(PunctuationId::Semi),

            // Operators
            '%' => self.scan_special(),
            _ => self.scan_operator(c),
        }
    }

    fn scan_symbol(&mut self, first: char) -> TokenKind {
        let start = self.current_pos - first.len_utf8();
        self.consume_while(is_symbol_continue);
        match keyword_id(&self.source[start..self.current_pos]) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Symbol,
        }
    }

    /// Scan a `%name%` operator; an unterminated one (no closing `%` on the line) is invalid.
    fn scan_special(&mut self) -> TokenKind {
        self.consume_while(|c| c != '%' && c != '\n');
        if self.match_char('%') {
            TokenKind::Operator(OperatorId::Special)
        } else {
            TokenKind::Invalid
        }
    }

    fn scan_operator(&mut self, c: char) -> TokenKind {
        let id = match c {
            '?' => OperatorId::Help,
            '~' => OperatorId::Tilde,
            '+' => OperatorId::Plus,
            '/' => OperatorId::Slash,
            '$' => OperatorId::Dollar,
            '@' => OperatorId::At,
            '^' => OperatorId::Caret,
            '*' => self.compound(OperatorId::Star, &[("*", OperatorId::Caret)]),
            '-' => self.compound(
                OperatorId::Minus,
                &[(">>", OperatorId::AssignRightParent), (">", OperatorId::AssignRight)],
            ),
            '<' => self.compound(
                OperatorId::Lt,
                &[
                    ("<-", OperatorId::AssignLeftParent),
                    ("-", OperatorId::AssignLeft),
                    ("=", OperatorId::LtEq),
                ],
            ),
            '>' => self.compound(OperatorId::Gt, &[("=", OperatorId::GtEq)]),
            '=' => self.compound(OperatorId::AssignEq, &[("=", OperatorId::EqEq)]),
            '!' => self.compound(OperatorId::Not, &[("=", OperatorId::NotEq)]),
            '&' => self.compound(OperatorId::And, &[("&", OperatorId::AndAnd)]),
            '|' => self.compound(
                OperatorId::Or,
                &[("|", OperatorId::OrOr), (">", OperatorId::Pipe)],
            ),
            ':' => self.compound(
                OperatorId::Colon,
                &[
                    ("::", OperatorId::NamespaceInternal),
                    (":", OperatorId::Namespace),
                    ("=", OperatorId::ColonAssign),
                ],
            ),
            _ => return TokenKind::Invalid,
        };
        TokenKind::Operator(id)
    }

    /// Try the longest compound continuation first; `compounds` must be ordered longest-first.
    fn compound(&mut self, simple: OperatorId, compounds: &[(&str, OperatorId)]) -> OperatorId {
        for (rest, id) in compounds {
            if self.source[self.current_pos..].starts_with(rest) {
                for _ in rest.chars() {
                    self.advance();
                }
                return *id;
            }
        }
        simple
    }

    // ========================================================================
    // Bracket helpers
    // ========================================================================

    fn open_bracket(&mut self, id: PunctuationId) -> TokenKind {
        self.brackets.push(id);
        TokenKind::Punctuation(id)
    }

    fn close_bracket(&mut self, id: PunctuationId) -> TokenKind {
        if self
            .brackets
            .last()
            .is_some_and(|&open| punctuation::is_complement(open, id))
        {
            self.brackets.pop();
        }
        TokenKind::Punctuation(id)
    }

    fn scan_right_bracket(&mut self) -> TokenKind {
        if self.brackets.last() == Some(&PunctuationId::LDoubleBracket) && self.match_char(']') {
            return self.close_bracket(PunctuationId::RDoubleBracket);
        }
        self.close_bracket(PunctuationId::RBracket)
    }
}

/// Tokenize `source` in full, excluding the trailing `End` token.
///
/// ## Notes
/// - Trivia (whitespace, comments) is included; filter with `Token::is_trivia` if unwanted.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        if token.kind == TokenKind::End {
            break;
        }
        tokens.push(token);
    }
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || c == '.'
}

fn is_symbol_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfront_core::lang::punctuation::PunctuationId as P;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Comment))
            .map(|t| t.kind)
            .collect()
    }

    fn contents(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.contents).collect()
    }

    #[test]
    fn test_simple_assignment() {
        assert_eq!(
            kinds("x <- 1"),
            vec![
                TokenKind::Symbol,
                TokenKind::Operator(OperatorId::AssignLeft),
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_trivia_is_kept() {
        assert_eq!(contents("a  # note\nb"), vec!["a", "  ", "# note", "\n", "b"]);
    }

    #[test]
    fn test_double_brackets_close_only_when_open() {
        assert_eq!(
            kinds("x[[1]]"),
            vec![
                TokenKind::Symbol,
                TokenKind::Punctuation(P::LDoubleBracket),
                TokenKind::Number,
                TokenKind::Punctuation(P::RDoubleBracket),
            ]
        );
        assert_eq!(
            kinds("x[y[1]]"),
            vec![
                TokenKind::Symbol,
                TokenKind::Punctuation(P::LBracket),
                TokenKind::Symbol,
                TokenKind::Punctuation(P::LBracket),
                TokenKind::Number,
                TokenKind::Punctuation(P::RBracket),
                TokenKind::Punctuation(P::RBracket),
            ]
        );
        assert_eq!(
            contents("x[[y[1]]]"),
            vec!["x", "[[", "y", "[", "1", "]", "]]"]
        );
    }

    #[test]
    fn test_compound_operators() {
        let ops: Vec<_> = contents("<<- <- <= -> ->> :: ::: := |> || && == != **");
        let ops: Vec<_> = ops.into_iter().filter(|s| s != " ").collect();
        assert_eq!(
            ops,
            vec!["<<-", "<-", "<=", "->", "->>", "::", ":::", ":=", "|>", "||", "&&", "==", "!=", "**"]
        );
        assert_eq!(kinds("**"), vec![TokenKind::Operator(OperatorId::Caret)]);
    }

    #[test]
    fn test_special_operators() {
        assert_eq!(
            kinds("a %in% b"),
            vec![
                TokenKind::Symbol,
                TokenKind::Operator(OperatorId::Special),
                TokenKind::Symbol,
            ]
        );
        assert_eq!(contents("%abc\n"), vec!["%abc", "\n"]);
        assert_eq!(kinds("%abc\n"), vec![TokenKind::Invalid]);
    }

    #[test]
    fn test_keywords_and_symbols() {
        assert_eq!(
            kinds("if else TRUE True .x x_1 \\"),
            vec![
                TokenKind::Keyword(KeywordId::If),
                TokenKind::Keyword(KeywordId::Else),
                TokenKind::Keyword(KeywordId::True),
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::Symbol,
                TokenKind::Keyword(KeywordId::Function),
            ]
        );
    }

    #[test]
    fn test_positions_track_rows_and_columns() {
        let toks: Vec<_> = tokenize("a\n  bb").into_iter().filter(|t| !t.is_trivia()).collect();
        assert_eq!(toks[0].position, Position::new(0, 0));
        assert_eq!(toks[1].position, Position::new(1, 2));
        assert_eq!(toks[1].span, Span::new(4, 6));
    }

    #[test]
    fn test_end_is_sticky() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(tokenizer.next_token().kind, TokenKind::Symbol);
        for _ in 0..3 {
            let end = tokenizer.next_token();
            assert_eq!(end.kind, TokenKind::End);
            assert_eq!(end.span, Span::new(1, 1));
        }
    }

    #[test]
    fn test_unknown_characters_are_invalid() {
        assert_eq!(kinds("a ` b"), vec![TokenKind::Symbol, TokenKind::Invalid]);
        assert_eq!(kinds("_x"), vec![TokenKind::Invalid, TokenKind::Symbol]);
    }

    #[test]
    fn test_lossless() {
        let src = "f <- function(x, y = 2) {\n  # add\n  x[[1]] + y %o% 'a\\'b' ; `odd name`\n}\n";
        let joined: String = contents(src).concat();
        assert_eq!(joined, src);
    }
}
