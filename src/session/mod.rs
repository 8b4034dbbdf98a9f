//! Game sessions
//!
//! Mutable per-player state driven by the caller through the engine.

mod board;
mod store;

pub use board::{GameSession, GuessOutcome, MAX_RESHUFFLE_ATTEMPTS};
pub use store::{SessionId, SessionStore};
