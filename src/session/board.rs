//! Per-player game session
//!
//! Holds the current puzzle and the guess being typed. All mutation goes
//! through engine calls so the scramble and checklist stay consistent.

use crate::core::dictionary::normalize;
use crate::core::{GameError, GameState};
use crate::engine::JumbleEngine;
use rand::Rng;
use tracing::debug;

/// Re-scrambles tried while the new scramble matches the previous one
pub const MAX_RESHUFFLE_ATTEMPTS: usize = 10;

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No puzzle in progress
    NoGame,
    /// Nothing was typed
    Empty,
    /// Not a dictionary word
    NotAWord,
    /// The target word itself, which never counts
    WholeWord,
    /// A real word, but not hidden in the target
    NotASubWord,
    /// Already on the found list
    AlreadyFound,
    /// Newly found, with this many sub-words still hidden
    Found { remaining: usize },
    /// Newly found and nothing is left to find
    Completed,
}

impl GuessOutcome {
    /// Whether the guess uncovered a new sub-word
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::Completed)
    }

    /// Text shown to the player
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoGame => "No game in progress. Start a new game first.".to_string(),
            Self::Empty => "Please enter a word.".to_string(),
            Self::NotAWord | Self::WholeWord | Self::NotASubWord => {
                "Guessed incorrectly".to_string()
            }
            Self::AlreadyFound => "Already found that one.".to_string(),
            Self::Found { remaining: 1 } => "Correct! 1 word left.".to_string(),
            Self::Found { remaining } => format!("Correct! {remaining} words left."),
            Self::Completed => "Congratulations! You've guessed all the words.".to_string(),
        }
    }
}

/// One player's game: the puzzle, if any, and the pending guess input
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    state: Option<GameState>,
    guess: String,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn has_game(&self) -> bool {
        self.state.is_some()
    }

    /// Start a fresh puzzle, replacing any game in progress
    ///
    /// # Errors
    ///
    /// Returns the engine's `GameError` when the puzzle cannot be built. The
    /// previous game is kept in that case.
    pub fn new_game<R: Rng>(
        &mut self,
        engine: &mut JumbleEngine<'_, R>,
        length: usize,
        min_length: Option<usize>,
    ) -> Result<(), GameError> {
        let state = engine.create_game_state(length, min_length)?;
        self.state = Some(state);
        self.guess.clear();
        Ok(())
    }

    /// Scramble the target again, avoiding a repeat of the current scramble
    ///
    /// Gives up after [`MAX_RESHUFFLE_ATTEMPTS`] and keeps the duplicate.
    pub fn reshuffle<R: Rng>(&mut self, engine: &mut JumbleEngine<'_, R>) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let previous = state.scramble().to_string();
        for attempt in 1..=MAX_RESHUFFLE_ATTEMPTS {
            let scramble = engine.scramble(state.original());
            let repeated = scramble == previous;
            state.set_scramble(scramble);
            if !repeated {
                return;
            }
            debug!(attempt, "reshuffle repeated the previous scramble");
        }
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Replace the pending guess input
    pub fn set_guess(&mut self, guess: impl Into<String>) {
        self.guess = guess.into();
    }

    pub fn push_guess_char(&mut self, c: char) {
        self.guess.push(c);
    }

    pub fn pop_guess_char(&mut self) {
        self.guess.pop();
    }

    /// Check the pending guess against the puzzle
    ///
    /// A hit marks the sub-word as found, clears the input and reshuffles the
    /// scramble. Misses leave everything as it was.
    pub fn submit_guess<R: Rng>(&mut self, engine: &mut JumbleEngine<'_, R>) -> GuessOutcome {
        let Some(state) = self.state.as_mut() else {
            return GuessOutcome::NoGame;
        };

        let guess = normalize(&self.guess);
        let outcome = if guess.is_empty() {
            GuessOutcome::Empty
        } else if !engine.exists(&guess) {
            GuessOutcome::NotAWord
        } else if guess == state.original() {
            GuessOutcome::WholeWord
        } else {
            match state.mark_guessed(&guess) {
                None => GuessOutcome::NotASubWord,
                Some(true) => GuessOutcome::AlreadyFound,
                Some(false) if state.is_complete() => GuessOutcome::Completed,
                Some(false) => GuessOutcome::Found {
                    remaining: state.remaining_count(),
                },
            }
        };

        debug!(guess = %guess, ?outcome, "guess submitted");
        if outcome.is_hit() {
            self.guess.clear();
            self.reshuffle(engine);
        }

        outcome
    }

    /// Whether every sub-word of the current puzzle has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_complete)
    }

    /// Drop the puzzle and the pending input
    pub fn reset(&mut self) {
        self.state = None;
        self.guess.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_words(["planet", "plan", "plane", "lane", "net", "cat"])
    }

    fn started<'a>(dictionary: &'a Dictionary) -> (GameSession, JumbleEngine<'a>) {
        let mut engine = JumbleEngine::seeded(dictionary, 8);
        let mut session = GameSession::new();
        session.new_game(&mut engine, 6, None).unwrap();
        (session, engine)
    }

    fn submit(
        session: &mut GameSession,
        engine: &mut JumbleEngine<'_>,
        guess: &str,
    ) -> GuessOutcome {
        session.set_guess(guess);
        session.submit_guess(engine)
    }

    #[test]
    fn new_session_has_no_game() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);
        let mut session = GameSession::new();

        assert!(!session.has_game());
        assert!(!session.is_complete());
        assert_eq!(
            submit(&mut session, &mut engine, "plan"),
            GuessOutcome::NoGame
        );
    }

    #[test]
    fn new_game_failure_keeps_previous_state() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        assert_eq!(
            session.new_game(&mut engine, 2, None),
            Err(GameError::InvalidLength(2))
        );
        assert_eq!(session.state().unwrap().original(), "planet");
    }

    #[test]
    fn hit_marks_word_and_clears_input() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        assert_eq!(
            submit(&mut session, &mut engine, "plan"),
            GuessOutcome::Found { remaining: 3 }
        );
        assert!(session.state().unwrap().is_guessed("plan"));
        assert_eq!(session.guess(), "");
    }

    #[test]
    fn guesses_are_normalized() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        assert!(submit(&mut session, &mut engine, "  LANE ").is_hit());
        assert!(session.state().unwrap().is_guessed("lane"));
    }

    #[test]
    fn misses_keep_input_and_checklist() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        assert_eq!(submit(&mut session, &mut engine, "   "), GuessOutcome::Empty);
        assert_eq!(
            submit(&mut session, &mut engine, "xyz"),
            GuessOutcome::NotAWord
        );
        assert_eq!(session.guess(), "xyz");
        assert_eq!(
            submit(&mut session, &mut engine, "planet"),
            GuessOutcome::WholeWord
        );
        assert_eq!(
            submit(&mut session, &mut engine, "cat"),
            GuessOutcome::NotASubWord
        );
        assert_eq!(session.state().unwrap().found_count(), 0);
    }

    #[test]
    fn repeat_guess_is_reported() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        submit(&mut session, &mut engine, "net");
        assert_eq!(
            submit(&mut session, &mut engine, "net"),
            GuessOutcome::AlreadyFound
        );
    }

    #[test]
    fn finding_every_word_completes() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        for word in ["plan", "plane", "lane"] {
            assert!(matches!(
                submit(&mut session, &mut engine, word),
                GuessOutcome::Found { .. }
            ));
        }
        assert!(!session.is_complete());
        assert_eq!(
            submit(&mut session, &mut engine, "net"),
            GuessOutcome::Completed
        );
        assert!(session.is_complete());
    }

    #[test]
    fn reshuffle_keeps_a_permutation() {
        let dictionary = setup_dictionary();
        let (mut session, mut engine) = started(&dictionary);

        for _ in 0..20 {
            let before = session.state().unwrap().scramble().to_string();
            session.reshuffle(&mut engine);
            let state = session.state().unwrap();

            let mut after: Vec<char> = state.scramble().chars().collect();
            let mut letters: Vec<char> = state.original().chars().collect();
            after.sort_unstable();
            letters.sort_unstable();
            assert_eq!(after, letters);
            assert_ne!(state.scramble(), state.original());
            assert_ne!(state.scramble(), before);
        }
    }

    #[test]
    fn reshuffle_without_game_is_noop() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 1);
        let mut session = GameSession::new();

        session.reshuffle(&mut engine);
        assert!(!session.has_game());
    }

    #[test]
    fn reset_drops_game() {
        let dictionary = setup_dictionary();
        let (mut session, _engine) = started(&dictionary);

        session.set_guess("pla");
        session.reset();
        assert!(!session.has_game());
        assert_eq!(session.guess(), "");
    }

    #[test]
    fn input_editing() {
        let mut session = GameSession::new();
        session.push_guess_char('n');
        session.push_guess_char('e');
        session.push_guess_char('x');
        session.pop_guess_char();
        session.push_guess_char('t');
        assert_eq!(session.guess(), "net");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(GuessOutcome::NotAWord.message(), "Guessed incorrectly");
        assert_eq!(GuessOutcome::WholeWord.message(), "Guessed incorrectly");
        assert_eq!(
            GuessOutcome::Found { remaining: 2 }.message(),
            "Correct! 2 words left."
        );
        assert!(GuessOutcome::Completed.message().starts_with("Congratulations"));
    }
}
