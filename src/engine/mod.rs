pub mod input;
pub mod runner;

pub use input::{Flow, Intent};
pub use runner::UnscrambleEngine;
