//! CLI module for the rfront front end
//!
//! This module provides the command-line interface for tokenizing and parsing R-like sources.
//!
//! ## Commands
//!
//! - `rfront <file>` - Check a file for syntax errors (default action)
//! - `--lex <file>` - Print the token stream (`--all` keeps whitespace and comments)
//! - `--parse <file>` - Print the indented tree dump
//! - `--sexp <file>` - Print one s-expression per top-level expression
//! - `-c <code>` - Parse inline source and print its s-expressions
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rfront_syntax::config::ParserConfig;

use crate::version::RFRONT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Error-tolerant tokenizer and parser for R-like sources
#[derive(Parser, Debug)]
#[command(name = "rfront")]
#[command(version = RFRONT_VERSION)]
#[command(about = "Tokenize and parse R-like sources with error recovery", long_about = None)]
pub struct Cli {
    /// File to check for syntax errors (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the token stream
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Include whitespace and comment tokens in --lex output
    #[arg(long = "all")]
    pub all: bool,

    /// Print the indented tree dump
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Print one s-expression per top-level expression
    #[arg(long = "sexp", value_name = "FILE", conflicts_with = "file")]
    pub sexp_file: Option<PathBuf>,

    /// Parse inline source code
    #[arg(short = 'c', long = "command", value_name = "CODE", conflicts_with = "file")]
    pub command: Option<String>,

    /// Maximum expression nesting depth before the parser bails out
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
}

impl Cli {
    /// Parser configuration derived from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        match self.max_depth {
            Some(depth) => ParserConfig::new().with_max_depth(depth),
            None => ParserConfig::default(),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.parser_config();
    tracing::debug!(max_depth = config.max_depth, "parser configuration");

    if cli.all && cli.lex_file.is_none() {
        return Err(CliError::failure("Error: --all only applies to --lex output"));
    }
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), cli.all);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), config);
    }
    if let Some(file) = cli.sexp_file {
        return commands::sexp_file(&file.to_string_lossy(), config);
    }
    if let Some(code) = cli.command {
        return commands::run_command(&code, config);
    }

    match cli.file {
        Some(file) => commands::check_file(&file.to_string_lossy(), config),
        // No mode and no file - nothing to do
        None => Err(CliError::failure(
            "Error: expected a FILE, or one of --lex/--parse/--sexp/-c (see --help)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
