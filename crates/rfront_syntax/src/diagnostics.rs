//! Syntax diagnostics.
//!
//! Parsing never aborts on the first problem: each problem becomes a [`Diagnostic`] pointing at the offending token
//! and the parser keeps going. Diagnostics implement [`miette::Diagnostic`] so front ends can render them with
//! source snippets.

use std::fmt;

use miette::LabeledSpan;
use rfront_core::lang::keywords::{self, KeywordId};
use rfront_core::lang::operators::{self, OperatorId};
use rfront_core::lang::punctuation::{self, PunctuationId};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Position, Token, TokenKind};

/// The syntactic construct being parsed when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Block,
    Parenthesized,
    /// Argument list opened by the given bracket (`(`, `[`, or `[[`).
    Arguments(PunctuationId),
    Function,
    Parameters,
    DefaultValue,
    Control(KeywordId),
    BinaryOperand(OperatorId),
    UnaryOperand(OperatorId),
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Block => f.write_str("braced block"),
            Construct::Parenthesized => f.write_str("parenthesized expression"),
            Construct::Arguments(PunctuationId::LParen) => f.write_str("call arguments"),
            Construct::Arguments(open) => write!(f, "'{}' index arguments", punctuation::as_str(*open)),
            Construct::Function => f.write_str("function definition"),
            Construct::Parameters => f.write_str("parameter list"),
            Construct::DefaultValue => f.write_str("parameter default value"),
            Construct::Control(id) => write!(f, "'{}' expression", keywords::as_str(*id)),
            Construct::BinaryOperand(id) => write!(f, "right operand of '{}'", operators::as_str(*id)),
            Construct::UnaryOperand(id) => write!(f, "operand of unary '{}'", operators::as_str(*id)),
        }
    }
}

/// A comma-separated list that can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListContext {
    /// Call or index arguments, closed by the given bracket.
    Arguments(PunctuationId),
    Parameters,
}

impl ListContext {
    /// Bracket that closes the list.
    pub fn closer(&self) -> PunctuationId {
        match self {
            ListContext::Arguments(closer) => *closer,
            ListContext::Parameters => PunctuationId::RParen,
        }
    }
}

impl fmt::Display for ListContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListContext::Arguments(_) => f.write_str("argument list"),
            ListContext::Parameters => f.write_str("parameter list"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("unexpected {found}{}", expected_suffix(.expected))]
    UnexpectedToken {
        found: String,
        expected: Option<TokenKind>,
    },
    #[error("unexpected end of input in {construct}")]
    UnexpectedEndOfInput { construct: Construct },
    #[error("expected ',' or '{}' in {context}, found {found}", closer_str(.context))]
    MalformedList { found: String, context: ListContext },
    #[error("expression nested deeper than {limit} levels")]
    RecursionLimitExceeded { limit: usize },
}

impl DiagnosticKind {
    /// Stable machine-readable suffix for the diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken { .. } => "unexpected_token",
            DiagnosticKind::UnexpectedEndOfInput { .. } => "unexpected_end_of_input",
            DiagnosticKind::MalformedList { .. } => "malformed_list",
            DiagnosticKind::RecursionLimitExceeded { .. } => "recursion_limit_exceeded",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken { .. } => "not expected here",
            DiagnosticKind::UnexpectedEndOfInput { .. } => "input ends here",
            DiagnosticKind::MalformedList { .. } => "bad separator",
            DiagnosticKind::RecursionLimitExceeded { .. } => "too deeply nested",
        }
    }
}

fn expected_suffix(expected: &Option<TokenKind>) -> String {
    match expected {
        Some(kind) => format!("; expected {kind}"),
        None => String::new(),
    }
}

fn closer_str(context: &ListContext) -> &'static str {
    punctuation::as_str(context.closer())
}

/// Describe the offending token for messages: `'x'`, `end of input`, …
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::End => "end of input".to_string(),
        TokenKind::Empty => "empty placeholder".to_string(),
        _ => format!("'{}'", token.contents.escape_debug()),
    }
}

/// A syntax problem anchored at a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub token: Token,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, token: Token) -> Self {
        Self {
            kind,
            token,
            hints: Vec::new(),
        }
    }

    pub fn unexpected_token(token: Token, expected: Option<TokenKind>) -> Self {
        let kind = DiagnosticKind::UnexpectedToken {
            found: describe(&token),
            expected,
        };
        Self::new(kind, token)
    }

    pub fn unexpected_end(token: Token, construct: Construct) -> Self {
        Self::new(DiagnosticKind::UnexpectedEndOfInput { construct }, token)
    }

    pub fn malformed_list(token: Token, context: ListContext) -> Self {
        let kind = DiagnosticKind::MalformedList {
            found: describe(&token),
            context,
        };
        Self::new(kind, token).with_hint("separate list elements with ','")
    }

    pub fn recursion_limit(token: Token, limit: usize) -> Self {
        Self::new(DiagnosticKind::RecursionLimitExceeded { limit }, token)
            .with_hint("raise the limit with ParserConfig::with_max_depth, or split the expression")
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Rendered message text.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn span(&self) -> Span {
        self.token.span
    }

    /// Zero-based position of the offending token.
    pub fn position(&self) -> Position {
        self.token.position
    }

    /// One-based `(line, column)` of the offending token.
    pub fn line_col(&self) -> (usize, usize) {
        (self.token.position.row + 1, self.token.position.column + 1)
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("rfront::syntax::{}", self.kind.code())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            return None;
        }
        Some(Box::new(self.hints.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.token.span;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.label().to_string()),
            span.start..span.end,
        ))))
    }
}
