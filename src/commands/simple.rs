//! Simple interactive CLI mode
//!
//! Text-based jumble game without TUI. Each player session lives in a
//! `SessionStore`; `goodbye` closes it and opens a fresh one.

use crate::engine::JumbleEngine;
use crate::output::formatters::{checklist_lines, spaced};
use crate::session::{GameSession, GuessOutcome, SessionId, SessionStore};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Sessions untouched for this long are closed
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Game settings used for every "new"
#[derive(Debug, Clone, Copy)]
pub struct GameSettings {
    pub length: usize,
    pub min_length: Option<usize>,
}

/// What the loop should do after a line of input
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Vec<String>),
    Quit(Vec<String>),
}

impl Step {
    fn into_lines(self) -> Vec<String> {
        match self {
            Self::Continue(lines) | Self::Quit(lines) => lines,
        }
    }
}

/// Text game driven one input line at a time
pub struct SimpleGame {
    store: SessionStore,
    current: SessionId,
    settings: GameSettings,
}

impl SimpleGame {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        let mut store = SessionStore::new();
        let current = store.create();
        Self {
            store,
            current,
            settings,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.store.get(self.current)
    }

    /// Handle one line of player input
    pub fn handle<R: Rng>(&mut self, engine: &mut JumbleEngine<'_, R>, line: &str) -> Step {
        let mut out = Vec::new();

        let expired = self.store.expire_idle(SESSION_IDLE_TIMEOUT);
        if expired > 0 && !self.store.contains(self.current) {
            out.push("Your session expired; starting a new one.".to_string());
            self.current = self.store.create();
        }

        let settings = self.settings;
        let Some(session) = self.store.get_mut(self.current) else {
            self.current = self.store.create();
            out.push("Session lost; starting a new one.".to_string());
            return Step::Continue(out);
        };

        match line.trim() {
            "quit" | "q" | "exit" => {
                out.push("👋 Thanks for playing!".to_string());
                return Step::Quit(out);
            }
            "new" | "n" => match session.new_game(engine, settings.length, settings.min_length) {
                Ok(()) => {
                    out.push("🔄 New game started!".to_string());
                    out.extend(board_lines(session));
                }
                Err(err) => out.push(format!("❌ {err}")),
            },
            "shuffle" | "s" => {
                session.reshuffle(engine);
                out.extend(board_lines(session));
            }
            "board" | "b" => out.extend(board_lines(session)),
            "goodbye" => {
                self.store.remove(self.current);
                self.current = self.store.create();
                out.push("Session closed. Type 'new' to play again.".to_string());
            }
            "help" | "h" | "?" => out.extend(help_lines()),
            guess => {
                session.set_guess(guess);
                let outcome = session.submit_guess(engine);
                out.push(outcome_line(&outcome));
                if outcome.is_hit() {
                    out.extend(board_lines(session));
                }
            }
        }

        Step::Continue(out)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(
    engine: &mut JumbleEngine<'_, R>,
    settings: GameSettings,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Jumble - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for line in help_lines() {
        println!("{line}");
    }
    println!();

    let mut game = SimpleGame::new(settings);
    for line in game.handle(engine, "new").into_lines() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("{} ", "guess>".bright_cyan());
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        match game.handle(engine, &input) {
            Step::Continue(lines) => lines.iter().for_each(|line| println!("{line}")),
            Step::Quit(lines) => {
                lines.iter().for_each(|line| println!("{line}"));
                return Ok(());
            }
        }
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "Unscramble the letters and find the words hidden inside the target word.".to_string(),
        "Type a word to guess it. The whole target word does not count!".to_string(),
        "Commands: 'new', 'shuffle', 'board', 'goodbye', 'help', 'quit'".to_string(),
    ]
}

fn outcome_line(outcome: &GuessOutcome) -> String {
    let message = outcome.message();
    match outcome {
        GuessOutcome::Completed => format!("🎉 {}", message.bright_green().bold()),
        GuessOutcome::Found { .. } => format!("✓ {}", message.green()),
        GuessOutcome::AlreadyFound | GuessOutcome::Empty => message.yellow().to_string(),
        _ => format!("❌ {}", message.red()),
    }
}

fn board_lines(session: &GameSession) -> Vec<String> {
    let Some(state) = session.state() else {
        return vec!["No game in progress. Type 'new' to start.".to_string()];
    };

    let mut lines = vec![
        String::new(),
        format!(
            "  Scramble: {}",
            spaced(&state.scramble().to_uppercase()).bright_yellow().bold()
        ),
        format!(
            "  Found {}/{} words",
            state.found_count(),
            state.sub_words().len()
        ),
    ];
    lines.extend(checklist_lines(state).into_iter().map(|line| format!("    {line}")));
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn setup_dictionary() -> Dictionary {
        Dictionary::from_words(["planet", "plan", "plane", "lane", "net", "cat"])
    }

    fn settings() -> GameSettings {
        GameSettings {
            length: 6,
            min_length: None,
        }
    }

    fn text(step: &Step) -> String {
        match step {
            Step::Continue(lines) | Step::Quit(lines) => lines.join("\n"),
        }
    }

    #[test]
    fn new_starts_a_game() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(settings());

        let step = game.handle(&mut engine, "new");
        assert!(text(&step).contains("New game started"));
        assert!(text(&step).contains("Found 0/4 words"));
        assert!(game.session().unwrap().has_game());
    }

    #[test]
    fn guesses_update_the_board() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(settings());
        game.handle(&mut engine, "new");

        let step = game.handle(&mut engine, "plan\n");
        assert!(text(&step).contains("Correct! 3 words left."));
        assert!(text(&step).contains("Found 1/4 words"));

        let step = game.handle(&mut engine, "planet");
        assert!(text(&step).contains("Guessed incorrectly"));
    }

    #[test]
    fn bad_settings_report_error() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(GameSettings {
            length: 6,
            min_length: Some(7),
        });

        let step = game.handle(&mut engine, "new");
        assert!(text(&step).contains("minLength=7 exceeds length=6"));
        assert!(!game.session().unwrap().has_game());
    }

    #[test]
    fn goodbye_opens_a_fresh_session() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(settings());
        game.handle(&mut engine, "new");

        game.handle(&mut engine, "goodbye");
        assert!(!game.session().unwrap().has_game());

        let step = game.handle(&mut engine, "plan");
        assert!(text(&step).contains("No game in progress"));
    }

    #[test]
    fn quit_ends_the_loop() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(settings());

        assert!(matches!(game.handle(&mut engine, "quit"), Step::Quit(_)));
    }

    #[test]
    fn completing_the_puzzle_congratulates() {
        let dictionary = setup_dictionary();
        let mut engine = JumbleEngine::seeded(&dictionary, 4);
        let mut game = SimpleGame::new(settings());
        game.handle(&mut engine, "new");

        for word in ["plan", "plane", "lane"] {
            game.handle(&mut engine, word);
        }
        let step = game.handle(&mut engine, "net");
        assert!(text(&step).contains("Congratulations"));
        assert!(game.session().unwrap().is_complete());
    }
}
