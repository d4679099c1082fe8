//! Error-tolerant precedence-climbing parser.
//!
//! Converts source text into an arena [`Ast`] plus a list of [`Diagnostic`]s. Parsing never fails: malformed input
//! yields degraded nodes and diagnostics, and parsing continues.
//!
//! ## Examples
//!
//! ```rust
//! use rfront_syntax::parser;
//!
//! let parsed = parser::parse("f(x)(y)\nif (a) b else c");
//! assert!(!parsed.has_errors());
//! assert_eq!(parsed.to_sexp(), "((f x) y)\n(if a b c)");
//! ```

use crate::ast::{Ast, NodeId};
use crate::config::ParserConfig;
use crate::diagnostics::{Construct, Diagnostic, ListContext};
use crate::lexer::{Token, TokenKind, Tokenizer};
use crate::precedence;
use rfront_core::lang::keywords::{self, KeywordCategory, KeywordId};
use rfront_core::lang::operators::OperatorId;
use rfront_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/control.rs");
include!("parser/calls.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
