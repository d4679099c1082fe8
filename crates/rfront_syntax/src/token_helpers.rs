//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with
//! ID-based tokens. Classification is total: every kind belongs to exactly one [`TokenCategory`].

use crate::lexer::{Token, TokenKind};
use rfront_core::lang::keywords::{self, KeywordCategory, KeywordId};
use rfront_core::lang::operators::{self, OperatorId};
use rfront_core::lang::punctuation::{self, BracketSide, PunctuationId};

/// Coarse token family; the categories partition every [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Whitespace,
    Comment,
    Keyword,
    Operator,
    Bracket,
    Separator,
    Literal,
    Sentinel,
    Invalid,
}

impl TokenKind {
    /// Return the category this kind belongs to.
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Whitespace => TokenCategory::Whitespace,
            TokenKind::Comment => TokenCategory::Comment,
            TokenKind::Keyword(_) => TokenCategory::Keyword,
            TokenKind::Operator(_) => TokenCategory::Operator,
            TokenKind::Punctuation(id) if punctuation::is_bracket(*id) => TokenCategory::Bracket,
            TokenKind::Punctuation(_) => TokenCategory::Separator,
            TokenKind::Symbol | TokenKind::Number | TokenKind::String => TokenCategory::Literal,
            TokenKind::Empty | TokenKind::End => TokenCategory::Sentinel,
            TokenKind::Invalid => TokenCategory::Invalid,
        }
    }

    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the paired bracket kind, or `None` for anything that is not a bracket.
    pub fn complement(&self) -> Option<TokenKind> {
        self.punctuation_id()
            .and_then(punctuation::complement)
            .map(TokenKind::Punctuation)
    }

    /// Return `true` if `self` and `other` are the two halves of one bracket pair.
    pub fn is_complement_of(&self, other: &TokenKind) -> bool {
        self.complement().as_ref() == Some(other)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.category()`.
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    /// Whitespace or comment: tokens the parser never sees.
    pub fn is_trivia(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    pub fn is_keyword(&self) -> bool {
        self.category() == TokenCategory::Keyword
    }

    /// `function`, `if`, `while`, `for`, `repeat`: keywords that start a dedicated construct.
    pub fn is_control_flow_keyword(&self) -> bool {
        self.keyword_id()
            .is_some_and(|id| keywords::category(id) == KeywordCategory::ControlFlow)
    }

    pub fn is_operator(&self) -> bool {
        self.category() == TokenCategory::Operator
    }

    /// Operators that may prefix a single operand (`-x`, `!x`, `~ y`, `?help`).
    pub fn is_unary_operator(&self) -> bool {
        self.operator_id()
            .is_some_and(|id| operators::info_for(id).is_unary())
    }

    /// Operators that may appear between two operands.
    pub fn is_binary_operator(&self) -> bool {
        self.operator_id()
            .is_some_and(|id| operators::info_for(id).is_binary())
    }

    pub fn is_bracket(&self) -> bool {
        self.category() == TokenCategory::Bracket
    }

    pub fn is_left_bracket(&self) -> bool {
        self.bracket_side() == Some(BracketSide::Open)
    }

    pub fn is_right_bracket(&self) -> bool {
        self.bracket_side() == Some(BracketSide::Close)
    }

    /// `(`, `[`, `[[`: brackets that open a call or index when they follow an expression.
    pub fn is_call_opener(&self) -> bool {
        self.is_left_bracket() && !self.kind.is_punctuation(PunctuationId::LBrace)
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }

    pub fn is_symbol(&self) -> bool {
        self.kind == TokenKind::Symbol
    }

    /// Tokens that form a complete primary expression on their own: symbols, literals, constants, and `break` /
    /// `next`.
    pub fn is_symbolic(&self) -> bool {
        match self.kind {
            TokenKind::Symbol | TokenKind::Number | TokenKind::String => true,
            TokenKind::Keyword(id) => matches!(
                keywords::category(id),
                KeywordCategory::Constant | KeywordCategory::Jump
            ),
            _ => false,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    pub fn is_empty(&self) -> bool {
        self.kind == TokenKind::Empty
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    fn bracket_side(&self) -> Option<BracketSide> {
        self.punctuation_id().and_then(punctuation::side)
    }
}
