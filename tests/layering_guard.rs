//! Layering guardrails to keep the vocabulary crate a leaf.
//!
//! `rfront_core` holds only the keyword/operator/bracket registries and must stay free of dependencies so every
//! other crate (and external tooling) can use it cheaply. This test scans its `Cargo.toml` and fails if a
//! `[dependencies]` table with entries appears.

#[test]
fn core_vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/rfront_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit a dependency table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]" || line.starts_with("[dependencies.");
            if line.starts_with("[dependencies.") {
                panic!("`rfront_core` must not declare dependencies, found table {line}");
            }
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if !line_no_comment.is_empty() {
            panic!("`rfront_core` must not declare dependencies, found `{line_no_comment}`");
        }
    }
}

#[test]
fn syntax_crate_does_not_depend_on_cli_stack() {
    let manifest = include_str!("../crates/rfront_syntax/Cargo.toml");
    for forbidden in ["clap", "tracing-subscriber"] {
        assert!(
            !manifest.lines().any(|line| line.trim_start().starts_with(forbidden)),
            "`rfront_syntax` must not depend on `{forbidden}`; keep it in the root crate"
        );
    }
}
