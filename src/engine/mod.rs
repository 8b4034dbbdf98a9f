//! Word engine
//!
//! Stateless algorithms over the dictionary plus the game state builder.

mod jumble;
pub mod query;
mod scramble;

pub use jumble::JumbleEngine;
pub use scramble::{MAX_SCRAMBLE_ATTEMPTS, scramble_with};
