//! Shareable metadata for `rfront_core::lang` registries.
//!
//! Every vocabulary family (keywords, operators, punctuation) is a `const` table of small, `Copy` metadata records.
//! This submodule holds the pieces those records have in common.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the tokenizer/parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::punctuation`]

/// Language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use rfront_core::lang::registry::Since;
///
/// let since = Since(4, 1);
/// assert!(since >= Since(4, 0));
/// assert_eq!(since.to_string(), "4.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Baseline language version: everything the front end has always understood.
pub const BASELINE: Since = Since(3, 0);

/// Describe the lifecycle status of a language vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// A small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body in source syntax.
/// - `note` is an optional short explanation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
