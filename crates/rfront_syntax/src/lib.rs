//! Shared syntax frontend: tokenizer, token classification, precedence table, arena AST, parser, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by linters, analyzers, highlighters, and any other tool
//! that needs a best-effort tree even for malformed input.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, no evaluation, no conversion of trees into a
//!   host runtime's values, no IO.
//! - Vocabulary identity (keywords/operators/brackets) comes from `rfront_core::lang` registries.
//! - Parsing never fails outright: callers always receive a tree plus the full list of diagnostics.
//!
//! ## Examples
//! ```rust
//! use rfront_syntax::parser;
//!
//! let parsed = parser::parse("x <- 1 + 2 * 3");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.to_sexp(), "(<- x (+ 1 (* 2 3)))");
//! ```
//!
//! ## See also
//! - `rfront_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod printer;
pub mod token_helpers;
