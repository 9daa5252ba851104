//! Word selection and letter shuffling.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::game::error::GameError;

/// Random shuffles tried before falling back to a rotation.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// A word can be scrambled only if it has at least two distinct letters.
pub fn is_shufflable(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Pick uniformly among the words not yet used this game.
pub fn pick_unused<'a, R: Rng>(
    words: &'a [String],
    used: &HashSet<String>,
    rng: &mut R,
) -> Result<&'a str, GameError> {
    let candidates: Vec<&'a String> = words.iter().filter(|w| !used.contains(*w)).collect();
    if candidates.is_empty() {
        return Err(GameError::ExhaustedWordPool {
            used: used.len(),
            available: words.len(),
        });
    }
    let idx = rng.random_range(0..candidates.len());
    Ok(candidates[idx].as_str())
}

/// Permute the letters of `word` into an arrangement different from `word`.
pub fn shuffle_word<R: Rng>(word: &str, rng: &mut R) -> Result<String, GameError> {
    if !is_shufflable(word) {
        return Err(GameError::UnshufflableWord {
            word: word.to_string(),
        });
    }

    let mut letters: Vec<char> = word.chars().collect();
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return Ok(candidate);
        }
    }

    // Rotating by one differs whenever two letters differ.
    warn!(word, attempts = MAX_SHUFFLE_ATTEMPTS, "shuffle kept matching, rotating instead");
    let mut letters: Vec<char> = word.chars().collect();
    letters.rotate_left(1);
    Ok(letters.into_iter().collect())
}

/// True when `a` and `b` contain exactly the same letters.
pub fn is_permutation(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
