//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser needs for precedence
//! climbing: binary precedence, unary precedence, and associativity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Precedence is a relative ordering where higher binds tighter; `0` means "not usable in this position".
//! - User-defined `%op%` operators all share the [`OperatorId::Special`] identity; the registry lists the common
//!   built-in spellings so they resolve, but the tokenizer accepts any `%…%` form.
//! - `->` and `->>` are left-associative, as in R: `1 -> a -> b` assigns `1` to `a`, then that value to `b`.
//!
//! ## Examples
//! ```rust
//! use rfront_core::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str("<-"), Some(OperatorId::AssignLeft));
//! assert_eq!(operators::from_str("**"), Some(OperatorId::Caret));
//! assert_eq!(operators::info_for(OperatorId::Caret).associativity, Associativity::Right);
//! assert!(operators::info_for(OperatorId::Star).binary > operators::info_for(OperatorId::Plus).binary);
//! ```

use super::registry::{BASELINE, Example, Since, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Help
    Help,

    // Assignment
    AssignEq,
    AssignLeft,
    AssignLeftParent,
    ColonAssign,
    AssignRight,
    AssignRightParent,

    // Formula
    Tilde,

    // Logical
    Or,
    OrOr,
    And,
    AndAnd,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Special,
    Pipe,
    Colon,
    Caret,

    // Access
    Dollar,
    At,
    Namespace,
    NamespaceInternal,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings[0]` is the canonical spelling; the rest are synonyms.
/// - `binary` is the infix precedence (`0` = never infix); `unary` is the prefix precedence (`0` = never prefix).
/// - `associativity` only matters for infix use.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub binary: u8,
    pub unary: u8,
    pub associativity: Associativity,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

impl OperatorInfo {
    /// Return `true` if the operator can appear between two operands.
    pub const fn is_binary(&self) -> bool {
        self.binary > 0
    }

    /// Return `true` if the operator can prefix a single operand.
    pub const fn is_unary(&self) -> bool {
        self.unary > 0
    }
}

/// Highest binary precedence in the table (the namespace operators).
pub const MAX_BINARY_PRECEDENCE: u8 = 17;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Help, &["?"], 1, 1, Associativity::Left),
    // Assignment
    op(OperatorId::AssignEq, &["="], 2, 0, Associativity::Right),
    op(OperatorId::AssignLeft, &["<-"], 3, 0, Associativity::Right),
    op(OperatorId::AssignLeftParent, &["<<-"], 3, 0, Associativity::Right),
    op(OperatorId::ColonAssign, &[":="], 3, 0, Associativity::Right),
    op(OperatorId::AssignRight, &["->"], 4, 0, Associativity::Left),
    op(OperatorId::AssignRightParent, &["->>"], 4, 0, Associativity::Left),
    // Formula
    op(OperatorId::Tilde, &["~"], 5, 5, Associativity::Left),
    // Logical
    op(OperatorId::Or, &["|"], 6, 0, Associativity::Left),
    op(OperatorId::OrOr, &["||"], 6, 0, Associativity::Left),
    op(OperatorId::And, &["&"], 7, 0, Associativity::Left),
    op(OperatorId::AndAnd, &["&&"], 7, 0, Associativity::Left),
    op(OperatorId::Not, &["!"], 0, 8, Associativity::Left),
    // Comparison
    op(OperatorId::EqEq, &["=="], 9, 0, Associativity::Left),
    op(OperatorId::NotEq, &["!="], 9, 0, Associativity::Left),
    op(OperatorId::Lt, &["<"], 9, 0, Associativity::Left),
    op(OperatorId::LtEq, &["<="], 9, 0, Associativity::Left),
    op(OperatorId::Gt, &[">"], 9, 0, Associativity::Left),
    op(OperatorId::GtEq, &[">="], 9, 0, Associativity::Left),
    // Arithmetic
    op(OperatorId::Plus, &["+"], 10, 14, Associativity::Left),
    op(OperatorId::Minus, &["-"], 10, 14, Associativity::Left),
    op(OperatorId::Star, &["*"], 11, 0, Associativity::Left),
    op(OperatorId::Slash, &["/"], 11, 0, Associativity::Left),
    OperatorInfo {
        examples: &[Example {
            code: "x %in% table",
            note: Some("Any `%name%` spelling is a special operator with this precedence."),
        }],
        ..op(
            OperatorId::Special,
            &["%%", "%/%", "%in%", "%o%", "%*%", "%x%"],
            12,
            0,
            Associativity::Left,
        )
    },
    OperatorInfo {
        since: Since(4, 1),
        ..op(OperatorId::Pipe, &["|>"], 12, 0, Associativity::Left)
    },
    op(OperatorId::Colon, &[":"], 13, 0, Associativity::Left),
    op(OperatorId::Caret, &["^", "**"], 15, 0, Associativity::Right),
    // Access
    op(OperatorId::Dollar, &["$"], 16, 0, Associativity::Left),
    op(OperatorId::At, &["@"], 16, 0, Associativity::Left),
    op(OperatorId::Namespace, &["::"], 17, 0, Associativity::Left),
    op(OperatorId::NamespaceInternal, &[":::"], 17, 0, Associativity::Left),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`], or is any `%name%` special form.
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    if let Some(o) = OPERATORS.iter().find(|o| {
        let spellings: &[&str] = o.spellings;
        spellings.contains(&spelling)
    }) {
        return Some(o.id);
    }
    is_special_spelling(spelling).then_some(OperatorId::Special)
}

/// Return `true` if `spelling` has the `%name%` shape of a user-defined special operator.
pub fn is_special_spelling(spelling: &str) -> bool {
    spelling.len() >= 2
        && spelling.starts_with('%')
        && spelling.ends_with('%')
        && !spelling[1..spelling.len() - 1].contains(['%', '\n'])
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    binary: u8,
    unary: u8,
    associativity: Associativity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        binary,
        unary,
        associativity,
        since: BASELINE,
        stability: Stability::Stable,
        examples: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_spellings() {
        assert_eq!(from_str("%in%"), Some(OperatorId::Special));
        assert_eq!(from_str("%my_op%"), Some(OperatorId::Special));
        assert_eq!(from_str("%"), None);
        assert_eq!(from_str("%a%b%"), None);
    }

    #[test]
    fn test_unary_capable_operators() {
        let unary: Vec<_> = OPERATORS.iter().filter(|o| o.is_unary()).map(|o| o.id).collect();
        assert_eq!(
            unary,
            vec![
                OperatorId::Help,
                OperatorId::Tilde,
                OperatorId::Not,
                OperatorId::Plus,
                OperatorId::Minus
            ]
        );
    }

    #[test]
    fn test_max_binary_precedence_matches_table() {
        let max = OPERATORS.iter().map(|o| o.binary).max();
        assert_eq!(max, Some(MAX_BINARY_PRECEDENCE));
    }
}
