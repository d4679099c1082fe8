//! Language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, and punctuation
//! (brackets and separators).
//!
//! The design goal is to avoid stringly-typed checks scattered across the tokenizer and parser. Callers work with
//! **stable IDs** and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The tokenizer/parser enforce syntax; registries provide spellings, precedence, and bracket pairing.
//!
//! ## Examples
//! ```rust
//! use rfront_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::as_str(KeywordId::Repeat), "repeat");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
