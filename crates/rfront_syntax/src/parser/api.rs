/// Parse `source` with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing. It always returns a tree; check
/// [`Parsed::diagnostics`] (or [`Parsed::has_errors`]) for problems.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parsed {
    Parser::new(source).parse()
}

/// Parse `source` with an explicit [`ParserConfig`].
#[tracing::instrument(skip_all, fields(source_len = source.len(), max_depth = config.max_depth))]
pub fn parse_with_config(source: &str, config: ParserConfig) -> Parsed {
    Parser::with_config(source, config).parse()
}
