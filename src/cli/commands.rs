//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Commands that print a tree still print it when the source has syntax errors: the parser recovers, so the
//! partial tree is useful. The diagnostics are then returned as the failure message.

use std::fs;

use rfront_syntax::config::ParserConfig;
use rfront_syntax::lexer::{Token, tokenize};
use rfront_syntax::parser::{Parsed, parse_with_config};

use super::{CliError, CliResult, ExitCode};
use crate::diagnostics::format_diagnostics;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while tokenizing and building the tree.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Name used for inline `-c` sources in rendered diagnostics.
const INLINE_SOURCE_NAME: &str = "<command>";

/// Read a source file with a size guard.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Output rendering
// ============================================================================

/// Render the token stream, one token per line as `line:col<TAB>kind<TAB>"contents"`.
///
/// Trivia (whitespace, newlines, comments) is skipped unless `all` is set.
pub fn render_tokens(source: &str, all: bool) -> String {
    let mut out = String::new();
    for token in tokenize(source).iter().filter(|t| all || !t.is_trivia()) {
        out.push_str(&render_token(token));
        out.push('\n');
    }
    out
}

fn render_token(token: &Token) -> String {
    format!("{}\t{}\t{:?}", token.position, token.kind.name(), token.contents)
}

/// Parse `source` and turn any diagnostics into a rendered failure.
pub fn check_source(file_name: &str, source: &str, config: ParserConfig) -> CliResult<Parsed> {
    let parsed = parse_with_config(source, config);
    if parsed.has_errors() {
        let msg = format_diagnostics(file_name, source, &parsed.diagnostics);
        return Err(CliError::failure(msg.trim_end()));
    }
    Ok(parsed)
}

/// Print `rendered`, then fail if the parse produced diagnostics.
fn print_then_report(file_name: &str, source: &str, parsed: &Parsed, rendered: &str) -> CliResult<ExitCode> {
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }
    if parsed.has_errors() {
        let msg = format_diagnostics(file_name, source, &parsed.diagnostics);
        return Err(CliError::failure(msg.trim_end()));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize and display the token stream.
pub fn lex_file(file_path: &str, all: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    print!("{}", render_tokens(&source, all));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the indented tree dump.
pub fn parse_file(file_path: &str, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let parsed = parse_with_config(&source, config);
    print_then_report(file_path, &source, &parsed, &parsed.dump())
}

/// Parse and display one s-expression per top-level expression.
pub fn sexp_file(file_path: &str, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let parsed = parse_with_config(&source, config);
    print_then_report(file_path, &source, &parsed, &parsed.to_sexp())
}

/// Parse inline source and display its s-expressions.
pub fn run_command(code: &str, config: ParserConfig) -> CliResult<ExitCode> {
    if code.trim().is_empty() {
        return Err(CliError::failure("Error: -c/--command requires source code string"));
    }
    let parsed = parse_with_config(code, config);
    print_then_report(INLINE_SOURCE_NAME, code, &parsed, &parsed.to_sexp())
}

/// Check a file for syntax errors.
pub fn check_file(file_path: &str, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let parsed = check_source(file_path, &source, config)?;
    println!("✓ No syntax errors ({} top-level expressions)", parsed.roots.len());
    Ok(ExitCode::SUCCESS)
}
