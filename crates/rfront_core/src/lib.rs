//! Provide the canonical, pure language vocabulary shared by the rfront tokenizer, parser, and tooling.
//!
//! This crate is intentionally small and dependency-free. It answers "what is this spelling?" and "how does this
//! operator bind?" without knowing anything about tokens, trees, or source text.
//!
//! ## Notes
//!
//! - **No IO**, no global state, no syntax types. The lexer/parser in `rfront_syntax` enforce the grammar.
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, `PunctuationId`) and look up metadata through the
//!   registry tables in [`lang`].

pub mod lang;
