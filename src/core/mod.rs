//! Core domain types for the word engine
//!
//! The dictionary and the puzzle state. Nothing here touches randomness or I/O
//! beyond loading the word list.

pub mod dictionary;
mod game;

pub use dictionary::Dictionary;
pub use game::{DEFAULT_MIN_LENGTH, GameError, GameState, MIN_WORD_LENGTH};
