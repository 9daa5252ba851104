use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::engine::UnscrambleEngine;
use crate::game::{GameConfig, GameUiState, GameViewModel, UnscrambleRenderer};

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "🔤 Unscramble the shuffled word in the terminal")]
#[command(version)]
pub struct Cli {
    /// JSON config file with words, max_words and score_increase
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Words per game (overrides the config file)
    #[arg(short, long)]
    pub max_words: Option<usize>,

    /// Points per correct answer (overrides the config file)
    #[arg(short, long)]
    pub score_increase: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here; the terminal belongs to the game
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file (or defaults) with command line overrides applied.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(max_words) = self.max_words {
            config.max_words = max_words;
        }
        if let Some(score_increase) = self.score_increase {
            config.score_increase = score_increase;
        }
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    let mut view_model = match cli.seed {
        Some(seed) => GameViewModel::seeded(config, seed)?,
        None => GameViewModel::new(config)?,
    };
    view_model.subscribe(|state: &GameUiState| debug!(?state, "ui state"));

    let renderer = UnscrambleRenderer::new(view_model.config().max_words);
    let engine = UnscrambleEngine::new(view_model, renderer);

    let terminal = ratatui::init();
    let result = engine.run(terminal).await;
    ratatui::restore();
    result
}
