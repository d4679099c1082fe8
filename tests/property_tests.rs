//! Property-based tests for the rfront front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use rfront::lang::keywords;
use rfront::{ParserConfig, Parsed, parse, parse_with_config, tokenize};

// =============================================================================
// Strategies
// =============================================================================

/// Lower-case identifiers that are not reserved words.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("identifier must not be a keyword", |s| keywords::from_str(s).is_none())
}

/// Short sources drawn from the characters that matter to the grammar.
fn r_like_source() -> impl Strategy<Value = String> {
    r#"[a-z0-9 (){}\[\],;+*^<>=!&|$@:~%"'`#\n.-]{0,64}"#
}

/// Check the structural guarantees every parse result must meet, however broken the input.
fn assert_well_formed(source: &str, parsed: &Parsed) -> Result<(), TestCaseError> {
    for &root in &parsed.roots {
        prop_assert!(parsed.ast.contains(root));
        prop_assert_eq!(parsed.ast.parent(root), None);
        for id in parsed.ast.descendants(root) {
            for &child in parsed.ast.children(id) {
                prop_assert_eq!(parsed.ast.parent(child), Some(id));
            }
        }
    }
    for diagnostic in &parsed.diagnostics {
        let span = diagnostic.span();
        prop_assert!(span.start <= span.end && span.end <= source.len());
    }
    Ok(())
}

// =============================================================================
// Tokenizer Properties
// =============================================================================

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    proptest! {
        /// Property: the token stream concatenates back to the source
        #[test]
        fn tokenization_is_lossless(source in any::<String>()) {
            let tokens = tokenize(&source);
            let rebuilt: String = tokens.iter().map(|t| t.contents.as_str()).collect();
            prop_assert_eq!(rebuilt, source);
        }

        /// Property: spans tile the source and positions agree with them
        #[test]
        fn spans_are_contiguous(source in r_like_source()) {
            let mut offset = 0;
            for token in tokenize(&source) {
                prop_assert_eq!(token.span.start, offset);
                prop_assert_eq!(&source[token.span.start..token.span.end], token.contents.as_str());
                let row = source[..offset].matches('\n').count();
                prop_assert_eq!(token.position.row, row);
                offset = token.span.end;
            }
            prop_assert_eq!(offset, source.len());
        }

        /// Property: identifiers survive tokenization as a single symbol
        #[test]
        fn identifiers_survive_lexing(ident in ident_strategy()) {
            let source = format!("x <- {}", ident);
            let tokens: Vec<_> = tokenize(&source).into_iter().filter(|t| !t.is_trivia()).collect();
            prop_assert_eq!(tokens.len(), 3);
            prop_assert!(tokens[2].is_symbol());
            prop_assert_eq!(tokens[2].contents.as_str(), ident.as_str());
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

#[cfg(test)]
mod parser_tests {
    use super::*;

    const LEFT_ASSOCIATIVE: &[&str] = &["+", "-", "*", "/", "%in%", "|>", ":", "&&", "||", "==", "$"];
    const RIGHT_ASSOCIATIVE: &[&str] = &["^", "<-", "<<-", "="];

    fn left_chain(op: &str, n: usize) -> (String, String) {
        let source = (1..=n).map(|i| format!("x{i}")).collect::<Vec<_>>().join(&format!(" {op} "));
        let mut expected = "x1".to_string();
        for i in 2..=n {
            expected = format!("({op} {expected} x{i})");
        }
        (source, expected)
    }

    fn right_chain(op: &str, n: usize) -> (String, String) {
        let source = (1..=n).map(|i| format!("x{i}")).collect::<Vec<_>>().join(&format!(" {op} "));
        let mut expected = format!("x{n}");
        for i in (1..n).rev() {
            expected = format!("({op} x{i} {expected})");
        }
        (source, expected)
    }

    proptest! {
        /// Property: parsing never panics and always yields a structurally valid tree
        #[test]
        fn parser_is_total(source in r_like_source()) {
            let parsed = parse(&source);
            assert_well_formed(&source, &parsed)?;
        }

        /// Property: the same holds for arbitrary text
        #[test]
        fn parser_is_total_on_any_text(source in any::<String>()) {
            let parsed = parse(&source);
            assert_well_formed(&source, &parsed)?;
        }

        /// Property: a tight depth limit degrades the tree but never breaks it
        #[test]
        fn depth_limit_keeps_tree_well_formed(source in r_like_source(), depth in 1usize..6) {
            let parsed = parse_with_config(&source, ParserConfig::new().with_max_depth(depth));
            assert_well_formed(&source, &parsed)?;
        }

        /// Property: left-associative operators group to the left
        #[test]
        fn left_associative_chains(op in prop::sample::select(LEFT_ASSOCIATIVE), n in 2usize..7) {
            let (source, expected) = left_chain(op, n);
            let parsed = parse(&source);
            prop_assert!(parsed.diagnostics.is_empty());
            prop_assert_eq!(parsed.to_sexp(), expected);
        }

        /// Property: right-associative operators group to the right
        #[test]
        fn right_associative_chains(op in prop::sample::select(RIGHT_ASSOCIATIVE), n in 2usize..7) {
            let (source, expected) = right_chain(op, n);
            let parsed = parse(&source);
            prop_assert!(parsed.diagnostics.is_empty());
            prop_assert_eq!(parsed.to_sexp(), expected);
        }

        /// Property: valid assignments of identifiers parse cleanly
        #[test]
        fn assignments_parse_cleanly(name in ident_strategy(), value in ident_strategy()) {
            let source = format!("{name} <- f({value}, k = {value})");
            let parsed = parse(&source);
            prop_assert!(parsed.diagnostics.is_empty());
            prop_assert_eq!(parsed.to_sexp(), format!("(<- {name} (f {value} (= k {value})))"));
        }
    }
}
