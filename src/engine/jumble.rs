//! Main word engine interface

use super::query;
use super::scramble::scramble_with;
use crate::core::{DEFAULT_MIN_LENGTH, Dictionary, GameError, GameState, MIN_WORD_LENGTH};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Word engine over a shared dictionary
///
/// Queries borrow the dictionary and take `&self`. Only the operations that
/// consult the random source (`scramble`, `pick_one_random_word`,
/// `create_game_state`) need `&mut self`.
pub struct JumbleEngine<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
}

impl<'a> JumbleEngine<'a> {
    /// Create an engine with an OS-seeded random source
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create an engine with a deterministic random source
    #[must_use]
    pub fn seeded(dictionary: &'a Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> JumbleEngine<'a, R> {
    /// Create an engine with the given random source
    pub const fn with_rng(dictionary: &'a Dictionary, rng: R) -> Self {
        Self { dictionary, rng }
    }

    /// Random permutation of `word` that differs from it when possible
    ///
    /// See [`scramble_with`](super::scramble_with) for the exact guarantees.
    pub fn scramble(&mut self, word: &str) -> String {
        scramble_with(word, &mut self.rng)
    }

    /// Case-insensitive membership test; blank input is never a word
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        query::exists(self.dictionary, word)
    }

    /// Every word starting with an alphabetic prefix
    #[must_use]
    pub fn words_matching_prefix(&self, prefix: &str) -> Vec<&'a str> {
        query::words_matching_prefix(self.dictionary, prefix)
    }

    /// Every word matching the optional first character, last character and length
    #[must_use]
    pub fn search_words(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> Vec<&'a str> {
        query::search_words(self.dictionary, start, end, length)
    }

    /// Dictionary words found as contiguous substrings of `word`
    #[must_use]
    pub fn generate_sub_words(&self, word: &str, min_length: usize) -> BTreeSet<String> {
        query::generate_sub_words(self.dictionary, word, min_length)
    }

    /// Every palindrome longer than one character
    #[must_use]
    pub fn retrieve_palindrome_words(&self) -> Vec<&'a str> {
        query::retrieve_palindrome_words(self.dictionary)
    }

    /// Uniformly random word with exactly `length` characters
    ///
    /// Returns `None` for a missing or zero length, or when no word fits.
    pub fn pick_one_random_word(&mut self, length: Option<usize>) -> Option<&'a str> {
        let length = length.filter(|&length| length > 0)?;
        query::words_of_length(self.dictionary, length)
            .choose(&mut self.rng)
            .copied()
    }

    /// Build a new puzzle from a random word of `length` characters
    ///
    /// `min_length` defaults to [`DEFAULT_MIN_LENGTH`]. The target word itself
    /// is left off the sub-word checklist since guessing it is never accepted.
    /// When `min_length` equals `length`, or nothing shorter hides in the
    /// target, the checklist is empty and the puzzle is complete on creation.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if:
    /// - `length` is below [`MIN_WORD_LENGTH`]
    /// - `min_length` is zero
    /// - `min_length` exceeds `length`
    /// - No dictionary word has `length` characters
    ///
    /// # Examples
    /// ```
    /// use jumble::core::Dictionary;
    /// use jumble::engine::JumbleEngine;
    ///
    /// let dictionary = Dictionary::from_words(["planet", "plan", "plane", "lane", "net"]);
    /// let mut engine = JumbleEngine::seeded(&dictionary, 1);
    ///
    /// let state = engine.create_game_state(6, None).unwrap();
    /// assert_eq!(state.original(), "planet");
    /// assert_ne!(state.scramble(), "planet");
    /// assert_eq!(state.sub_words().len(), 4);
    /// ```
    pub fn create_game_state(
        &mut self,
        length: usize,
        min_length: Option<usize>,
    ) -> Result<GameState, GameError> {
        if length < MIN_WORD_LENGTH {
            return Err(GameError::InvalidLength(length));
        }

        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        if min_length == 0 {
            return Err(GameError::InvalidMinLength(min_length));
        }
        if min_length > length {
            return Err(GameError::MinLengthExceedsLength { min_length, length });
        }

        let original = self
            .pick_one_random_word(Some(length))
            .ok_or(GameError::NoWordAvailable(length))?;

        let scramble = self.scramble(original);
        let sub_words = query::puzzle_sub_words(self.dictionary, original, min_length);

        let state = GameState::new(original.to_string(), scramble, sub_words);
        if state.sub_words().is_empty() {
            debug!(original, min_length, "puzzle has nothing to find");
        }
        info!(
            length,
            min_length,
            sub_words = state.sub_words().len(),
            "created game state"
        );

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_words([
            "planet", "garden", "plan", "plane", "lane", "net", "ant", "an", "garde", "den",
            "gar", "cat", "dog", "level",
        ])
    }

    #[test]
    fn pick_one_random_word_matches_length() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 5);

        for _ in 0..20 {
            let word = engine.pick_one_random_word(Some(6)).unwrap();
            assert!(word == "planet" || word == "garden");
        }
    }

    #[test]
    fn pick_one_random_word_none_cases() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 5);

        assert_eq!(engine.pick_one_random_word(None), None);
        assert_eq!(engine.pick_one_random_word(Some(0)), None);
        assert_eq!(engine.pick_one_random_word(Some(12)), None);
    }

    #[test]
    fn pick_one_random_word_reaches_every_candidate() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 11);

        let picked: BTreeSet<&str> = (0..100)
            .filter_map(|_| engine.pick_one_random_word(Some(3)))
            .collect();
        let expected: BTreeSet<&str> = ["net", "ant", "den", "gar", "cat", "dog"].into();
        assert_eq!(picked, expected);
    }

    #[test]
    fn create_game_state_rejects_short_length() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        assert_eq!(
            engine.create_game_state(2, None),
            Err(GameError::InvalidLength(2))
        );
        assert_eq!(
            engine.create_game_state(0, Some(3)),
            Err(GameError::InvalidLength(0))
        );
    }

    #[test]
    fn create_game_state_rejects_zero_min_length() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        assert_eq!(
            engine.create_game_state(6, Some(0)),
            Err(GameError::InvalidMinLength(0))
        );
    }

    #[test]
    fn create_game_state_rejects_min_length_above_length() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        assert_eq!(
            engine.create_game_state(6, Some(7)),
            Err(GameError::MinLengthExceedsLength {
                min_length: 7,
                length: 6
            })
        );
    }

    #[test]
    fn create_game_state_without_candidate_word() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        assert_eq!(
            engine.create_game_state(9, None),
            Err(GameError::NoWordAvailable(9))
        );
    }

    #[test]
    fn create_game_state_on_empty_dictionary() {
        let dictionary = Dictionary::default();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        assert_eq!(
            engine.create_game_state(6, Some(3)),
            Err(GameError::NoWordAvailable(6))
        );
    }

    #[test]
    fn create_game_state_builds_valid_puzzle() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 2);

        for _ in 0..20 {
            let state = engine.create_game_state(6, Some(3)).unwrap();
            let original = state.original();

            assert_eq!(original.chars().count(), 6);
            assert_ne!(state.scramble(), original);

            let mut scrambled: Vec<char> = state.scramble().chars().collect();
            let mut letters: Vec<char> = original.chars().collect();
            scrambled.sort_unstable();
            letters.sort_unstable();
            assert_eq!(scrambled, letters);

            assert!(!state.sub_words().is_empty());
            for (word, &guessed) in state.sub_words() {
                assert!(original.contains(word.as_str()), "'{word}' not in '{original}'");
                assert!(dictionary.contains(word));
                assert!(word.chars().count() >= 3);
                assert_ne!(word, original);
                assert!(!guessed);
            }
        }
    }

    #[test]
    fn create_game_state_uses_default_min_length() {
        let dictionary = Dictionary::from_words(["planet", "an", "plan", "net"]);
        let mut engine = JumbleEngine::seeded(&dictionary, 3);

        let state = engine.create_game_state(6, None).unwrap();
        let keys: Vec<&str> = state.sub_words().keys().map(String::as_str).collect();
        assert_eq!(keys, ["net", "plan"]);
    }

    #[test]
    fn create_game_state_honours_min_length() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);

        let state = engine.create_game_state(6, Some(5)).unwrap();
        for word in state.sub_words().keys() {
            assert!(word.chars().count() >= 5);
        }
    }

    #[test]
    fn create_game_state_accepts_minimum_length() {
        let dictionary = Dictionary::from_words(["cat", "at", "a"]);
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        let state = engine.create_game_state(MIN_WORD_LENGTH, None).unwrap();
        assert_eq!(state.original(), "cat");
        assert!(state.sub_words().is_empty());
        assert!(state.is_complete());
    }

    #[test]
    fn create_game_state_min_length_one() {
        let dictionary = Dictionary::from_words(["cat", "at", "a"]);
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        let state = engine.create_game_state(3, Some(1)).unwrap();
        let keys: Vec<&str> = state.sub_words().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "at"]);
        assert!(!state.is_complete());
    }

    #[test]
    fn create_game_state_min_length_equal_to_length() {
        let dictionary = Dictionary::from_words(["planet", "plan", "net", "cat", "cats"]);
        let mut engine = JumbleEngine::seeded(&dictionary, 1);

        let state = engine.create_game_state(6, Some(6)).unwrap();
        assert_eq!(state.original(), "planet");
        assert_ne!(state.scramble(), "planet");
        assert!(state.sub_words().is_empty());
        assert!(state.is_complete());
    }

    #[test]
    fn queries_delegate_to_dictionary() {
        let dictionary = setup_dictionary();
        let engine = JumbleEngine::seeded(&dictionary, 1);

        assert!(engine.exists("PLANET"));
        assert_eq!(engine.words_matching_prefix("pla"), ["planet", "plan", "plane"]);
        assert_eq!(engine.search_words(Some('g'), Some('n'), Some(6)), ["garden"]);
        assert_eq!(engine.retrieve_palindrome_words(), ["level"]);
        assert!(engine.generate_sub_words("garden", 3).contains("den"));
    }

    #[test]
    fn seeded_engines_agree() {
        let dictionary = setup_dictionary();
        let mut first = JumbleEngine::seeded(&dictionary, 77);
        let mut second = JumbleEngine::seeded(&dictionary, 77);

        assert_eq!(
            first.create_game_state(6, None),
            second.create_game_state(6, None)
        );
    }
}
