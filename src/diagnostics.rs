//! Human-facing rendering of syntax diagnostics.
//!
//! Renders [`Diagnostic`]s with a source snippet, a label under the offending token, the diagnostic code, and any
//! hints, using miette's graphical handler without colors so output is stable in logs and tests.

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use rfront_syntax::diagnostics::Diagnostic;

/// Render one diagnostic against the source it came from.
pub fn format_diagnostic(file_name: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let report = Report::new(diagnostic.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        tracing::warn!(file = file_name, "graphical rendering failed; using plain output");
        return format!("{file_name}:{}: {diagnostic}\n", diagnostic.position());
    }
    out
}

/// Render every diagnostic, in order, separated by blank lines.
pub fn format_diagnostics(file_name: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format_diagnostic(file_name, source, d))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering_includes_message_code_and_location() {
        let source = "x <- )";
        let parsed = rfront_syntax::parser::parse(source);
        assert_eq!(parsed.diagnostics.len(), 1);

        let rendered = format_diagnostic("demo.R", source, &parsed.diagnostics[0]);
        assert!(rendered.contains("unexpected ')'"), "{rendered}");
        assert!(rendered.contains("rfront::syntax::unexpected_token"), "{rendered}");
        assert!(rendered.contains("demo.R"), "{rendered}");
        assert!(rendered.contains("x <- )"), "{rendered}");
    }

    #[test]
    fn test_rendering_includes_hints() {
        let source = "f(a b)";
        let parsed = rfront_syntax::parser::parse(source);
        let rendered = format_diagnostics("demo.R", source, &parsed.diagnostics);
        assert!(rendered.contains("separate list elements with ','"), "{rendered}");
    }
}
