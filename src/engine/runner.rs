use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use rand::Rng;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::renderer::GameRenderer;
use crate::engine::input::{self, Flow, Intent};
use crate::game::{GameUiState, GameViewModel};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Drives one view-model from terminal key events and redraws it on a fixed interval.
pub struct UnscrambleEngine<G: GameRenderer<GameUiState>, R: Rng> {
    view_model: GameViewModel<R>,
    renderer: G,
}

impl<G: GameRenderer<GameUiState>, R: Rng> UnscrambleEngine<G, R> {
    pub fn new(view_model: GameViewModel<R>, renderer: G) -> Self {
        Self { view_model, renderer }
    }

    pub fn view_model(&self) -> &GameViewModel<R> {
        &self.view_model
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut render_timer = tokio::time::interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                _ = render_timer.tick() => {
                    let state = self.view_model.ui_state();
                    let guess = self.view_model.user_guess();
                    terminal.draw(|f| {
                        if let Some(position) = self.renderer.render(f, state, guess) {
                            f.set_cursor_position(position);
                        }
                    })?;
                }

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            let intent = Intent::from_key(key, self.view_model.ui_state().is_game_over);
                            debug!(?intent, "key");
                            if input::apply(&mut self.view_model, intent)? == Flow::Exit {
                                break;
                            }
                            // Redraw right away instead of waiting for the next frame tick.
                            render_timer.reset_immediately();
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
            }
        }

        info!(score = self.view_model.ui_state().score, "leaving game");
        Ok(())
    }
}
