//! Parser configuration.

/// Default nesting limit for [`ParserConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a single parse.
///
/// ## Examples
/// ```rust
/// use rfront_syntax::config::ParserConfig;
///
/// let config = ParserConfig::default().with_max_depth(32);
/// assert_eq!(config.max_depth, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested productions before the parser gives up on the current construct and reports
    /// `RecursionLimitExceeded`.
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
