//! Game controller: owns the snapshot, the used-words set and the pending guess.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::observable::{StateHolder, SubscriptionId};
use crate::game::config::GameConfig;
use crate::game::error::GameError;
use crate::game::state::GameUiState;
use crate::game::words;

pub struct GameViewModel<R: Rng = StdRng> {
    config: GameConfig,
    ui_state: StateHolder<GameUiState>,
    user_guess: String,
    current_word: String,
    used_words: HashSet<String>,
    rng: R,
}

impl GameViewModel<StdRng> {
    /// Start a game seeded from the OS entropy source.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a reproducible game.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameViewModel<R> {
    /// Validate the config and start the first round.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        let config = config.normalized();
        config.validate()?;

        let mut view_model = Self {
            config,
            ui_state: StateHolder::new(GameUiState::default()),
            user_guess: String::new(),
            current_word: String::new(),
            used_words: HashSet::new(),
            rng,
        };
        view_model.reset_game()?;
        Ok(view_model)
    }

    pub fn ui_state(&self) -> &GameUiState {
        self.ui_state.value()
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// The answer for the active round.
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Observe snapshots. The observer is called with the current one immediately.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameUiState) + 'static) -> SubscriptionId {
        self.ui_state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.ui_state.unsubscribe(id)
    }

    /// Forget every used word and start over at round one.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.used_words.clear();
        self.user_guess.clear();
        let scrambled = self.pick_word()?;
        info!(max_words = self.config.max_words, "new game");
        self.ui_state.set(GameUiState {
            current_scrambled_word: scrambled,
            ..GameUiState::default()
        });
        Ok(())
    }

    /// Store the in-progress guess. Does not emit a snapshot.
    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Submit the pending guess and clear it.
    ///
    /// Has no effect on the snapshot once the game is over.
    pub fn check_user_guess(&mut self) -> Result<(), GameError> {
        let guess = std::mem::take(&mut self.user_guess);
        if self.ui_state().is_game_over {
            debug!("guess ignored, game is over");
            return Ok(());
        }

        if guess.to_lowercase() == self.current_word.to_lowercase() {
            let updated_score = self.ui_state().score.saturating_add(self.config.score_increase);
            debug!(word = %self.current_word, updated_score, "correct guess");
            self.advance_round(updated_score)
        } else {
            debug!(guess = %guess, "wrong guess");
            self.ui_state.update(|state| GameUiState {
                is_guessed_word_wrong: true,
                ..state.clone()
            });
            Ok(())
        }
    }

    /// Move past the current word, or end the game if it was the last one.
    pub fn advance_round(&mut self, updated_score: u32) -> Result<(), GameError> {
        if self.used_words.len() >= self.config.max_words {
            info!(score = updated_score, "game over");
            self.ui_state.update(|state| GameUiState {
                is_guessed_word_wrong: false,
                score: updated_score,
                is_game_over: true,
                ..state.clone()
            });
            return Ok(());
        }

        let scrambled = self.pick_word()?;
        self.ui_state.update(|state| GameUiState {
            current_scrambled_word: scrambled,
            is_guessed_word_wrong: false,
            score: updated_score,
            current_word_count: state.current_word_count + 1,
            is_game_over: false,
        });
        Ok(())
    }

    /// Advance without scoring. Has no effect on the snapshot once the game is over.
    pub fn skip_word(&mut self) -> Result<(), GameError> {
        self.user_guess.clear();
        if self.ui_state().is_game_over {
            debug!("skip ignored, game is over");
            return Ok(());
        }
        debug!(word = %self.current_word, "word skipped");
        let score = self.ui_state().score;
        self.advance_round(score)
    }

    fn pick_word(&mut self) -> Result<String, GameError> {
        let word = words::pick_unused(&self.config.words, &self.used_words, &mut self.rng)?.to_owned();
        let scrambled = words::shuffle_word(&word, &mut self.rng)?;
        debug!(round = self.used_words.len() + 1, %scrambled, "word picked");
        self.used_words.insert(word.clone());
        self.current_word = word;
        Ok(scrambled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn small_config() -> GameConfig {
        GameConfig {
            words: ["apple", "brick", "cloud", "delta", "eagle"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            max_words: 3,
            score_increase: 20,
        }
    }

    fn new_game() -> GameViewModel {
        GameViewModel::seeded(small_config(), 42).unwrap()
    }

    fn guess_right(vm: &mut GameViewModel) {
        let answer = vm.current_word().to_uppercase();
        vm.update_user_guess(answer);
        vm.check_user_guess().unwrap();
    }

    fn assert_round_invariants(vm: &GameViewModel) {
        let state = vm.ui_state();
        assert_eq!(vm.used_words().len(), state.current_word_count);
        assert!(vm.used_words().contains(vm.current_word()));
        assert_ne!(state.current_scrambled_word, vm.current_word());
        assert!(words::is_permutation(&state.current_scrambled_word, vm.current_word()));
    }

    #[test]
    fn new_game_starts_at_first_round() {
        let vm = new_game();
        let state = vm.ui_state();

        assert_eq!(state.score, 0);
        assert_eq!(state.current_word_count, 1);
        assert!(!state.is_guessed_word_wrong);
        assert!(!state.is_game_over);
        assert!(vm.user_guess().is_empty());
        assert!(vm.config().words.contains(&vm.current_word().to_string()));
        assert_round_invariants(&vm);
    }

    #[test]
    fn correct_guess_ignores_case_and_scores() {
        let mut vm = new_game();
        guess_right(&mut vm);

        let state = vm.ui_state();
        assert_eq!(state.score, 20);
        assert_eq!(state.current_word_count, 2);
        assert!(!state.is_guessed_word_wrong);
        assert!(vm.user_guess().is_empty());
        assert_round_invariants(&vm);
    }

    #[test]
    fn wrong_guess_only_flags() {
        let mut vm = new_game();
        let before = vm.ui_state().clone();

        vm.update_user_guess("definitely wrong");
        vm.check_user_guess().unwrap();

        let state = vm.ui_state();
        assert!(state.is_guessed_word_wrong);
        assert_eq!(state.score, before.score);
        assert_eq!(state.current_word_count, before.current_word_count);
        assert_eq!(state.current_scrambled_word, before.current_scrambled_word);
        assert!(vm.user_guess().is_empty());
    }

    #[test]
    fn next_transition_clears_wrong_flag() {
        let mut vm = new_game();
        vm.update_user_guess("nope");
        vm.check_user_guess().unwrap();
        assert!(vm.ui_state().is_guessed_word_wrong);

        guess_right(&mut vm);
        assert!(!vm.ui_state().is_guessed_word_wrong);
        assert_eq!(vm.ui_state().score, 20);
    }

    #[test]
    fn skip_advances_without_scoring() {
        let mut vm = new_game();
        vm.update_user_guess("half typed");
        vm.skip_word().unwrap();

        let state = vm.ui_state();
        assert_eq!(state.score, 0);
        assert_eq!(state.current_word_count, 2);
        assert!(vm.user_guess().is_empty());
        assert_round_invariants(&vm);
    }

    #[test]
    fn game_ends_after_max_words_and_stays_over() {
        let mut vm = new_game();
        guess_right(&mut vm);
        vm.skip_word().unwrap();
        assert_eq!(vm.ui_state().current_word_count, 3);
        assert!(!vm.ui_state().is_game_over);

        guess_right(&mut vm);
        let final_state = vm.ui_state().clone();
        assert!(final_state.is_game_over);
        assert_eq!(final_state.score, 40);
        assert_eq!(final_state.current_word_count, 3);
        assert_eq!(vm.used_words().len(), 3);

        guess_right(&mut vm);
        vm.skip_word().unwrap();
        assert_eq!(vm.ui_state(), &final_state);
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let mut vm = new_game();
        guess_right(&mut vm);
        guess_right(&mut vm);
        guess_right(&mut vm);
        assert!(vm.ui_state().is_game_over);

        vm.update_user_guess("leftover");
        vm.reset_game().unwrap();

        let state = vm.ui_state();
        assert_eq!(state.score, 0);
        assert_eq!(state.current_word_count, 1);
        assert!(!state.is_game_over);
        assert!(vm.user_guess().is_empty());
        assert_round_invariants(&vm);
    }

    #[test]
    fn words_do_not_repeat_within_a_game() {
        let config = GameConfig {
            max_words: 5,
            ..small_config()
        };
        let mut vm = GameViewModel::seeded(config, 7).unwrap();
        let mut seen = vec![vm.current_word().to_string()];
        for _ in 0..4 {
            vm.skip_word().unwrap();
            seen.push(vm.current_word().to_string());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);

        vm.skip_word().unwrap();
        assert!(vm.ui_state().is_game_over);
    }

    #[test]
    fn observers_see_every_distinct_snapshot() {
        let mut vm = new_game();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = vm.subscribe(move |state: &GameUiState| sink.borrow_mut().push(state.clone()));

        vm.update_user_guess("typing");
        assert_eq!(seen.borrow().len(), 1);

        vm.check_user_guess().unwrap();
        vm.update_user_guess("again");
        vm.check_user_guess().unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[1].is_guessed_word_wrong);

        vm.skip_word().unwrap();
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(seen.borrow().last(), Some(vm.ui_state()));

        assert!(vm.unsubscribe(id));
        vm.skip_word().unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = GameConfig {
            max_words: 6,
            ..small_config()
        };
        assert!(matches!(
            GameViewModel::seeded(config, 1),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let mut a = new_game();
        let mut b = new_game();
        for _ in 0..2 {
            assert_eq!(a.ui_state(), b.ui_state());
            a.skip_word().unwrap();
            b.skip_word().unwrap();
        }
        assert_eq!(a.ui_state(), b.ui_state());
    }
}
