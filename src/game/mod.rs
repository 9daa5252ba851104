//! Unscramble game module
pub mod config;
pub mod data;
pub mod error;
pub mod renderer;
pub mod state;
pub mod view_model;
pub mod words;

pub use config::GameConfig;
pub use error::GameError;
pub use renderer::UnscrambleRenderer;
pub use state::GameUiState;
pub use view_model::GameViewModel;
