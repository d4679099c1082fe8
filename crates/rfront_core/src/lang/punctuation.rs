//! Punctuation vocabulary: brackets and separators.
//!
//! This module defines the canonical set of non-operator punctuation tokens and the **complement relation** that
//! pairs every opening bracket with its closing bracket.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - [`complement`] is a fixed bijection over bracket ids and an involution:
//!   `complement(complement(b)) == Some(b)` for every bracket `b`.
//!
//! ## Examples
//! ```rust
//! use rfront_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("[["), Some(PunctuationId::LDoubleBracket));
//! assert_eq!(punctuation::complement(PunctuationId::LDoubleBracket), Some(PunctuationId::RDoubleBracket));
//! assert!(punctuation::is_complement(PunctuationId::RBrace, PunctuationId::LBrace));
//! assert_eq!(punctuation::complement(PunctuationId::Comma), None);
//! ```

use super::registry::{BASELINE, Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
}

/// Which side of a bracket pair a delimiter sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketSide {
    Open,
    Close,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semi,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LDoubleBracket,
    RDoubleBracket,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    /// Side and paired id, for delimiters only.
    pub bracket: Option<(BracketSide, PunctuationId)>,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    separator(PunctuationId::Comma, ","),
    separator(PunctuationId::Semi, ";"),
    // Delimiters
    open(PunctuationId::LParen, "(", PunctuationId::RParen),
    close(PunctuationId::RParen, ")", PunctuationId::LParen),
    open(PunctuationId::LBrace, "{", PunctuationId::RBrace),
    close(PunctuationId::RBrace, "}", PunctuationId::LBrace),
    open(PunctuationId::LBracket, "[", PunctuationId::RBracket),
    close(PunctuationId::RBracket, "]", PunctuationId::LBracket),
    open(PunctuationId::LDoubleBracket, "[[", PunctuationId::RDoubleBracket),
    close(PunctuationId::RDoubleBracket, "]]", PunctuationId::LDoubleBracket),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the bracket side, or `None` for separators.
pub fn side(id: PunctuationId) -> Option<BracketSide> {
    info_for(id).bracket.map(|(side, _)| side)
}

/// Return `true` if `id` is one of the eight bracket delimiters.
pub fn is_bracket(id: PunctuationId) -> bool {
    category(id) == PunctuationCategory::Delimiter
}

/// Return the paired bracket for `id`.
///
/// ## Returns
/// - `Some(paired)` for brackets (opening maps to closing and vice versa).
/// - `None` for separators.
pub fn complement(id: PunctuationId) -> Option<PunctuationId> {
    info_for(id).bracket.map(|(_, paired)| paired)
}

/// Return `true` if `a` and `b` form a bracket pair (in either order).
pub fn is_complement(a: PunctuationId, b: PunctuationId) -> bool {
    complement(a) == Some(b)
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn entry(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    bracket: Option<(BracketSide, PunctuationId)>,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        bracket,
        since: BASELINE,
        stability: Stability::Stable,
    }
}

const fn separator(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    entry(id, canonical, PunctuationCategory::Separator, None)
}

const fn open(id: PunctuationId, canonical: &'static str, paired: PunctuationId) -> PunctuationInfo {
    entry(
        id,
        canonical,
        PunctuationCategory::Delimiter,
        Some((BracketSide::Open, paired)),
    )
}

const fn close(id: PunctuationId, canonical: &'static str, paired: PunctuationId) -> PunctuationInfo {
    entry(
        id,
        canonical,
        PunctuationCategory::Delimiter,
        Some((BracketSide::Close, paired)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complements_are_detected() {
        assert_eq!(complement(PunctuationId::LParen), Some(PunctuationId::RParen));
        assert_eq!(complement(PunctuationId::LBrace), Some(PunctuationId::RBrace));
        assert_eq!(complement(PunctuationId::LBracket), Some(PunctuationId::RBracket));
        assert_eq!(
            complement(PunctuationId::LDoubleBracket),
            Some(PunctuationId::RDoubleBracket)
        );

        assert_eq!(complement(PunctuationId::RParen), Some(PunctuationId::LParen));
        assert_eq!(complement(PunctuationId::RBrace), Some(PunctuationId::LBrace));
        assert_eq!(complement(PunctuationId::RBracket), Some(PunctuationId::LBracket));
        assert_eq!(
            complement(PunctuationId::RDoubleBracket),
            Some(PunctuationId::LDoubleBracket)
        );
    }

    #[test]
    fn test_complement_sides_are_opposite() {
        for p in PUNCTUATION.iter().filter(|p| is_bracket(p.id)) {
            let paired = complement(p.id).expect("brackets have a complement");
            assert_ne!(side(p.id), side(paired), "{:?} and {:?} share a side", p.id, paired);
        }
    }

    #[test]
    fn test_separators_have_no_complement() {
        assert_eq!(complement(PunctuationId::Comma), None);
        assert_eq!(complement(PunctuationId::Semi), None);
        assert!(!is_complement(PunctuationId::Comma, PunctuationId::Comma));
    }
}
