//! Parser configuration

/// What to write into populated token slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenMode {
    /// Historical behavior: every populated slot repeats the example's
    /// token count. Kept as the default for output compatibility with
    /// existing consumers.
    #[default]
    Counts,
    /// Slot `s` holds the actual token id at position `s`.
    Ids,
}

/// Fixed configuration for an [`UtteranceParser`](super::UtteranceParser).
///
/// Supplied once at construction and immutable for the operation's
/// lifetime. The two maxima are hard upper bounds on per-example lengths;
/// inputs exceeding them abort the batch rather than being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum feature frames per example
    pub features_len_max: usize,
    /// Maximum tokens per example
    pub tokens_len_max: usize,
    /// Token slot fill mode
    pub token_mode: TokenMode,
}

impl ParserConfig {
    /// Create a config with the two hard length bounds.
    #[must_use]
    pub fn new(features_len_max: usize, tokens_len_max: usize) -> Self {
        Self {
            features_len_max,
            tokens_len_max,
            token_mode: TokenMode::default(),
        }
    }

    /// Set the token slot fill mode.
    #[must_use]
    pub fn token_mode(mut self, mode: TokenMode) -> Self {
        self.token_mode = mode;
        self
    }
}
