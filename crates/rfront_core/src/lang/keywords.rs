//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `TRUE` is a keyword, `True` is an ordinary symbol.
//! - The lambda shorthand `\` is registered as an alias of `function`.
//!
//! ## Examples
//! ```rust
//! use rfront_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::from_str("\\"), Some(KeywordId::Function));
//! assert_eq!(keywords::category(KeywordId::Else), KeywordCategory::Clause);
//! ```

use super::registry::{BASELINE, Example, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    Function,
    If,
    Else,
    While,
    For,
    In,
    Repeat,
    Break,
    Next,

    // Constants
    True,
    False,
    Null,
    Inf,
    NaN,
    Na,
    NaInteger,
    NaReal,
    NaCharacter,
    NaComplex,
}

/// Grammatical role of a keyword.
///
/// ## Notes
/// - `ControlFlow` keywords introduce a dedicated grammar production.
/// - `Clause` keywords are only meaningful inside a control-flow construct (`else`, `in`).
/// - `Jump` and `Constant` keywords are complete expressions on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Clause,
    Jump,
    Constant,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info_with_aliases(
        KeywordId::Function,
        "function",
        &["\\"],
        KeywordCategory::ControlFlow,
        BASELINE,
        &[
            Example {
                code: "function(x, y = 2) x + y",
                note: None,
            },
            Example {
                code: "\\(x) x + 1",
                note: Some("Lambda shorthand; `\\` is an alias of `function`."),
            },
        ],
    ),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, BASELINE),
    info(KeywordId::Else, "else", KeywordCategory::Clause, BASELINE),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, BASELINE),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, BASELINE),
    info(KeywordId::In, "in", KeywordCategory::Clause, BASELINE),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow, BASELINE),
    info(KeywordId::Break, "break", KeywordCategory::Jump, BASELINE),
    info(KeywordId::Next, "next", KeywordCategory::Jump, BASELINE),
    // Constants
    info(KeywordId::True, "TRUE", KeywordCategory::Constant, BASELINE),
    info(KeywordId::False, "FALSE", KeywordCategory::Constant, BASELINE),
    info(KeywordId::Null, "NULL", KeywordCategory::Constant, BASELINE),
    info(KeywordId::Inf, "Inf", KeywordCategory::Constant, BASELINE),
    info(KeywordId::NaN, "NaN", KeywordCategory::Constant, BASELINE),
    info(KeywordId::Na, "NA", KeywordCategory::Constant, BASELINE),
    info(KeywordId::NaInteger, "NA_integer_", KeywordCategory::Constant, BASELINE),
    info(KeywordId::NaReal, "NA_real_", KeywordCategory::Constant, BASELINE),
    info(KeywordId::NaCharacter, "NA_character_", KeywordCategory::Constant, BASELINE),
    info(KeywordId::NaComplex, "NA_complex_", KeywordCategory::Constant, BASELINE),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases: &[],
        category,
        since,
        stability: Stability::Stable,
        examples: &[],
    }
}

const fn info_with_aliases(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    since: Since,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        since,
        stability: Stability::Stable,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_keywords() {
        let control: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.category == KeywordCategory::ControlFlow)
            .map(|k| k.id)
            .collect();
        assert_eq!(
            control,
            vec![
                KeywordId::Function,
                KeywordId::If,
                KeywordId::While,
                KeywordId::For,
                KeywordId::Repeat
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("TRUE"), Some(KeywordId::True));
        assert_eq!(from_str("True"), None);
        assert_eq!(from_str("If"), None);
    }
}
