use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use crate::game::{GameError, GameViewModel};

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Type(char),
    Backspace,
    Submit,
    Skip,
    PlayAgain,
    Quit,
    Ignore,
}

/// Whether the engine loop keeps going after an intent is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Intent {
    /// Map a key to an intent. The final-score dialog only understands play again and exit.
    pub fn from_key(key: KeyEvent, game_over: bool) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Intent::Quit,
                _ => Intent::Ignore,
            };
        }

        if game_over {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('p') => Intent::PlayAgain,
                KeyCode::Esc | KeyCode::Char('q') => Intent::Quit,
                _ => Intent::Ignore,
            };
        }

        match key.code {
            KeyCode::Esc => Intent::Quit,
            KeyCode::Enter => Intent::Submit,
            KeyCode::Tab => Intent::Skip,
            KeyCode::Backspace => Intent::Backspace,
            KeyCode::Char(c) => Intent::Type(c),
            _ => Intent::Ignore,
        }
    }
}

/// Invoke the view-model action behind an intent.
pub fn apply<R: Rng>(view_model: &mut GameViewModel<R>, intent: Intent) -> Result<Flow, GameError> {
    match intent {
        Intent::Type(c) => {
            let mut guess = view_model.user_guess().to_owned();
            guess.push(c);
            view_model.update_user_guess(guess);
        }
        Intent::Backspace => {
            let mut guess = view_model.user_guess().to_owned();
            guess.pop();
            view_model.update_user_guess(guess);
        }
        Intent::Submit => view_model.check_user_guess()?,
        Intent::Skip => view_model.skip_word()?,
        Intent::PlayAgain => view_model.reset_game()?,
        Intent::Quit => return Ok(Flow::Exit),
        Intent::Ignore => {}
    }
    Ok(Flow::Continue)
}
