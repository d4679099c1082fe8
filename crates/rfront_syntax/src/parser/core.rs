// Parser core types and entrypoint.
//
// This chunk defines the `Parser` type, its top-level `parse()` loop, and the `Parsed` result.
//
// This file is `include!`'d into `crate::parser` to keep all parser methods in a
// single module while avoiding a single “god file”.

/// Outcome of a construct production.
///
/// - `Ok(node)`: the finished construct.
/// - `Err(Some(node))`: the construct was abandoned; `node` is the degraded stand-in to use instead.
/// - `Err(None)`: input ran out inside the construct (already reported).
type Production = Result<NodeId, Option<NodeId>>;

/// Collapse a [`Production`] into the node the caller should use, if any.
fn settle(production: Production) -> Option<NodeId> {
    production.map_or_else(|degraded| degraded, Some)
}

/// A bracketed construct still waiting for its closer.
///
/// A token that matches the innermost enclosure (its closer, or `,` in a comma-separated list) is never swallowed by
/// error recovery; the enclosing construct consumes it.
#[derive(Debug, Clone, Copy)]
struct Enclosure {
    closer: TokenKind,
    separated: bool,
}

/// Result of parsing a source text: the arena, the top-level expressions, and every diagnostic.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub ast: Ast,
    pub roots: Vec<NodeId>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// One s-expression line per top-level expression.
    pub fn to_sexp(&self) -> String {
        self.roots
            .iter()
            .map(|&root| self.ast.to_sexp(root))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indented dump of every top-level tree.
    pub fn dump(&self) -> String {
        self.ast.dump(&self.roots)
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser pulls tokens lazily from a [`Tokenizer`] and never sees whitespace or comments.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    ast: Ast,
    diagnostics: Vec<Diagnostic>,
    config: ParserConfig,
    /// Active nested productions, bounded by `config.max_depth`.
    depth: usize,
    enclosures: Vec<Enclosure>,
    /// End of input is reported once, by the innermost construct that needed more tokens.
    end_reported: bool,
    /// Set once the depth limit is reported; cleared when a production next starts below the limit.
    depth_reported: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default [`ParserConfig`].
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: &'a str, config: ParserConfig) -> Self {
        let mut tokenizer = Tokenizer::new(source);
        let current = next_significant(&mut tokenizer);
        Self {
            tokenizer,
            current,
            ast: Ast::new(),
            diagnostics: Vec::new(),
            config,
            depth: 0,
            enclosures: Vec::new(),
            end_reported: false,
            depth_reported: false,
        }
    }

    /// Parse expressions until end of input.
    ///
    /// Top-level expressions may be separated by `;`.
    pub fn parse(mut self) -> Parsed {
        let mut roots = Vec::new();
        loop {
            while self.check_punct(PunctuationId::Semi) {
                self.advance();
            }
            match self.parse_expression(0) {
                Some(root) => roots.push(root),
                None => break,
            }
        }

        tracing::debug!(
            roots = roots.len(),
            nodes = self.ast.len(),
            diagnostics = self.diagnostics.len(),
            "parsed"
        );
        Parsed {
            ast: self.ast,
            roots,
            diagnostics: self.diagnostics,
        }
    }
}

/// Pull the next token the parser cares about, skipping trivia.
fn next_significant(tokenizer: &mut Tokenizer<'_>) -> Token {
    loop {
        let token = tokenizer.next_token();
        if !token.is_trivia() {
            return token;
        }
    }
}

fn punct(id: PunctuationId) -> TokenKind {
    TokenKind::Punctuation(id)
}
