pub mod cli;
pub mod core;
pub mod engine;
pub mod game;

// Re-export for convenience
pub use crate::game::{GameConfig, GameError, GameUiState, GameViewModel};
