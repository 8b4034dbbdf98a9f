//! Puzzle state for the unscramble game
//!
//! A `GameState` holds the target word, its current scramble and the checklist
//! of sub-words still to be found.

use std::collections::BTreeMap;
use std::fmt;

/// Default minimum sub-word length when the caller does not pick one
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Shortest target word a puzzle can be built from
pub const MIN_WORD_LENGTH: usize = 3;

/// One puzzle: target word, scramble, and sub-word checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    original: String,
    scramble: String,
    sub_words: BTreeMap<String, bool>,
}

/// Error type for puzzles that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidLength(usize),
    InvalidMinLength(usize),
    MinLengthExceedsLength { min_length: usize, length: usize },
    NoWordAvailable(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(length) => write!(
                f,
                "Invalid length={length}, expected at least {MIN_WORD_LENGTH}"
            ),
            Self::InvalidMinLength(min_length) => write!(
                f,
                "Invalid minLength={min_length}, expected a positive integer"
            ),
            Self::MinLengthExceedsLength { min_length, length } => write!(
                f,
                "minLength={min_length} exceeds length={length}, expected minLength <= length"
            ),
            Self::NoWordAvailable(length) => {
                write!(f, "No word of length={length} found in the dictionary")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl GameState {
    /// Assemble a puzzle with every sub-word unguessed
    pub(crate) fn new<I>(original: String, scramble: String, sub_words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            original,
            scramble,
            sub_words: sub_words.into_iter().map(|word| (word, false)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// Replace the scramble; only the engine produces valid permutations
    pub(crate) fn set_scramble(&mut self, scramble: String) {
        self.scramble = scramble;
    }

    /// Checklist of sub-words, sorted, with their guessed flag
    #[must_use]
    pub const fn sub_words(&self) -> &BTreeMap<String, bool> {
        &self.sub_words
    }

    /// Whether `word` is on the checklist and already guessed
    #[must_use]
    pub fn is_guessed(&self, word: &str) -> bool {
        self.sub_words.get(word).copied().unwrap_or(false)
    }

    /// Mark a checklist entry as guessed
    ///
    /// Returns the previous flag, or `None` if `word` is not on the checklist
    /// (the checklist is left untouched in that case).
    pub fn mark_guessed(&mut self, word: &str) -> Option<bool> {
        self.sub_words
            .get_mut(word)
            .map(|guessed| std::mem::replace(guessed, true))
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.sub_words.values().filter(|&&guessed| guessed).count()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.sub_words.len() - self.found_count()
    }

    /// True once every sub-word has been guessed
    ///
    /// An empty checklist is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sub_words.values().all(|&guessed| guessed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet() -> GameState {
        GameState::new(
            "planet".to_string(),
            "tenalp".to_string(),
            ["plan", "plane", "lane", "net"].map(String::from),
        )
    }

    #[test]
    fn new_state_starts_unguessed() {
        let state = planet();
        assert_eq!(state.original(), "planet");
        assert_eq!(state.scramble(), "tenalp");
        assert_eq!(state.sub_words().len(), 4);
        assert!(state.sub_words().values().all(|&guessed| !guessed));
        assert_eq!(state.found_count(), 0);
        assert_eq!(state.remaining_count(), 4);
        assert!(!state.is_complete());
    }

    #[test]
    fn checklist_is_sorted() {
        let state = planet();
        let keys: Vec<&str> = state.sub_words().keys().map(String::as_str).collect();
        assert_eq!(keys, ["lane", "net", "plan", "plane"]);
    }

    #[test]
    fn mark_guessed_reports_previous_flag() {
        let mut state = planet();
        assert_eq!(state.mark_guessed("lane"), Some(false));
        assert_eq!(state.mark_guessed("lane"), Some(true));
        assert!(state.is_guessed("lane"));
        assert_eq!(state.found_count(), 1);
    }

    #[test]
    fn mark_guessed_ignores_unknown_words() {
        let mut state = planet();
        assert_eq!(state.mark_guessed("ant"), None);
        assert!(!state.sub_words().contains_key("ant"));
        assert_eq!(state.sub_words().len(), 4);
    }

    #[test]
    fn complete_when_all_guessed() {
        let mut state = planet();
        for word in ["plan", "plane", "lane", "net"] {
            state.mark_guessed(word);
        }
        assert!(state.is_complete());
        assert_eq!(state.remaining_count(), 0);
    }

    #[test]
    fn empty_checklist_is_complete() {
        let state = GameState::new("zzz".to_string(), "zzz".to_string(), Vec::new());
        assert!(state.is_complete());
    }

    #[test]
    fn error_messages_name_the_parameter() {
        assert!(GameError::InvalidLength(2).to_string().contains("length=2"));
        assert!(
            GameError::InvalidMinLength(0)
                .to_string()
                .contains("minLength=0")
        );
        let exceeds = GameError::MinLengthExceedsLength {
            min_length: 7,
            length: 6,
        }
        .to_string();
        assert!(exceeds.contains("minLength=7") && exceeds.contains("length=6"));
        assert!(GameError::NoWordAvailable(9).to_string().contains("length=9"));
    }
}
