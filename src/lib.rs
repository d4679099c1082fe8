#![forbid(unsafe_code)]
//! rfront: an error-tolerant front end for R-like scripting languages.
//!
//! This crate bundles the syntax frontend with a small CLI and human-facing diagnostic rendering. The tokenizer,
//! parser, and arena AST live in `rfront_syntax`; the keyword/operator/bracket vocabulary lives in `rfront_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a parser bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.
//!
//! ## Examples
//! ```rust
//! let parsed = rfront::parse("if (x > 1) y else z");
//! assert!(!parsed.has_errors());
//! assert_eq!(parsed.to_sexp(), "(if (> x 1) y z)");
//! ```

pub mod cli;
pub mod diagnostics;
pub mod version;

pub use rfront_core::lang;
pub use rfront_syntax::ast;
pub use rfront_syntax::config::ParserConfig;
pub use rfront_syntax::lexer;
pub use rfront_syntax::parser;
pub use rfront_syntax::precedence;

pub use rfront_syntax::lexer::{Token, TokenKind, Tokenizer, tokenize};
pub use rfront_syntax::parser::{Parsed, parse, parse_with_config};
