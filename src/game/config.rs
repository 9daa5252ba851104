use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::data::{ALL_WORDS, MAX_NO_OF_WORDS, SCORE_INCREASE};
use crate::game::error::GameError;
use crate::game::words::is_shufflable;

/// Injected game settings: word pool, rounds per game and points per correct answer.
///
/// Every field has a default, so a JSON file only needs the keys it overrides:
///
/// ```json
/// { "max_words": 5, "words": ["rust", "cargo", "crate", "trait", "borrow"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub words: Vec<String>,
    pub max_words: usize,
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: ALL_WORDS.iter().map(|w| w.to_string()).collect(),
            max_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Trim and lowercase every word, dropping blanks and duplicates. Order is kept.
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.words = self
            .words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        self
    }

    /// Reject settings under which a game could not be completed.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_words == 0 {
            return Err(GameError::InvalidConfig(
                "max_words must be at least 1".to_string(),
            ));
        }
        if let Some(word) = self.words.iter().find(|w| !is_shufflable(w)) {
            return Err(GameError::InvalidConfig(format!(
                "word '{word}' needs at least two distinct letters"
            )));
        }
        let distinct: HashSet<&String> = self.words.iter().collect();
        if distinct.len() < self.max_words {
            return Err(GameError::InvalidConfig(format!(
                "{} distinct words cannot fill {} rounds",
                distinct.len(),
                self.max_words
            )));
        }
        Ok(())
    }
}
