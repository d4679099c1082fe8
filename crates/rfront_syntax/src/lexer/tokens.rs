//! Token types for the rfront tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including the `\` lambda shorthand)
//! - `Operator(OperatorId)` for operators (every `%name%` spelling shares `OperatorId::Special`)
//! - `Punctuation(PunctuationId)` for brackets and separators
//!
//! ## Notes
//! - Tokens keep their exact source text in `contents`: concatenating the contents of every token reproduces the
//!   input byte for byte.
//! - `Empty` is never produced by the tokenizer; the parser uses it for synthesized placeholder nodes.
//! - Use `crate::token_helpers` for classification predicates at call sites.

use std::fmt;

use crate::ast::Span;
use rfront_core::lang::keywords::{self, KeywordId};
use rfront_core::lang::operators::{self, OperatorId};
use rfront_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Symbols and literals ==========
    Symbol,
    Number,
    String,

    // ========== Trivia ==========
    Whitespace,
    Comment,

    // ========== Special ==========
    Invalid,
    Empty, // parser placeholder
    End,   // end of input
}

impl TokenKind {
    /// Short lowercase name of the kind, independent of the concrete spelling.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Punctuation(_) => "punctuation",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Invalid => "invalid",
            TokenKind::Empty => "empty",
            TokenKind::End => "end",
        }
    }
}

/// Human-readable description used in diagnostics ("expected ')'", "expected symbol").
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Invalid => f.write_str("invalid token"),
            TokenKind::End => f.write_str("end of input"),
            other => f.write_str(other.name()),
        }
    }
}

/// Zero-based `(row, column)` of a token's first character.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    /// Render as a one-based `line:column` pair, the way editors show it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}

/// A token with its kind, exact source text, byte span, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub contents: String,
    pub span: Span,
    pub position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, contents: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            contents: contents.into(),
            span,
            position,
        }
    }

    /// A zero-width `Empty` placeholder located at the start of `at`.
    pub fn empty_at(at: &Token) -> Self {
        Self::new(
            TokenKind::Empty,
            String::new(),
            Span::new(at.span.start, at.span.start),
            at.position,
        )
    }

    /// The zero-width `End` token located at `offset`.
    pub fn end(offset: usize, position: Position) -> Self {
        Self::new(TokenKind::End, String::new(), Span::new(offset, offset), position)
    }
}

/// Resolve a symbol spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
