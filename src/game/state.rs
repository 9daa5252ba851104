use serde::{Deserialize, Serialize};

/// Observable snapshot of one game, replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUiState {
    pub current_scrambled_word: String,
    /// Set only by the most recent incorrect submission.
    pub is_guessed_word_wrong: bool,
    pub score: u32,
    /// 1-based number of words presented so far.
    pub current_word_count: usize,
    pub is_game_over: bool,
}

impl Default for GameUiState {
    fn default() -> Self {
        Self {
            current_scrambled_word: String::new(),
            is_guessed_word_wrong: false,
            score: 0,
            current_word_count: 1,
            is_game_over: false,
        }
    }
}
