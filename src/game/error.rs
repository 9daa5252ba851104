use thiserror::Error;

/// Failures raised by word selection and configuration checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every word in the pool has already been presented this game.
    #[error("word pool exhausted: {used} of {available} words already used")]
    ExhaustedWordPool { used: usize, available: usize },

    /// The word has fewer than two distinct letters, so no different arrangement exists.
    #[error("word '{word}' cannot be shuffled into a different arrangement")]
    UnshufflableWord { word: String },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
