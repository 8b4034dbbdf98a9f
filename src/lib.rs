//! Jumble
//!
//! A word-puzzle engine: scrambles words, answers dictionary queries and runs
//! an unscramble game where players hunt for the words hidden inside a target.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::core::Dictionary;
//! use jumble::engine::JumbleEngine;
//!
//! let dictionary = Dictionary::from_words(["planet", "plan", "plane", "lane", "net"]);
//! let mut engine = JumbleEngine::seeded(&dictionary, 7);
//!
//! assert!(engine.exists("Planet"));
//! let state = engine.create_game_state(6, None).unwrap();
//! println!("Unscramble: {}", state.scramble());
//! ```

// Core domain types
pub mod core;

// Dictionary queries, scrambling and puzzle construction
pub mod engine;

// Per-player game sessions
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
