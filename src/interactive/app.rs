//! TUI application state and logic

use crate::commands::GameSettings;
use crate::engine::JumbleEngine;
use crate::session::{GameSession, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, R: Rng = StdRng> {
    pub engine: JumbleEngine<'a, R>,
    pub session: GameSession,
    pub settings: GameSettings,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(engine: JumbleEngine<'a, R>, settings: GameSettings) -> Self {
        Self {
            engine,
            session: GameSession::new(),
            settings,
            messages: vec![Message {
                text: "Welcome! Find the words hidden inside the scrambled target.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game(
            &mut self.engine,
            self.settings.length,
            self.settings.min_length,
        ) {
            Ok(()) => {
                self.stats.games_started += 1;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                let hidden = self
                    .session
                    .state()
                    .map_or(0, |state| state.sub_words().len());
                self.add_message(
                    &format!("New game started! {hidden} words to find."),
                    MessageStyle::Info,
                );
                if self.session.is_complete() {
                    // Nothing hidden in this target
                    self.finish_game();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit_guess(&mut self) {
        let outcome = self.session.submit_guess(&mut self.engine);
        debug!(?outcome, "tui guess");

        let style = match outcome {
            GuessOutcome::Found { .. } | GuessOutcome::Completed => MessageStyle::Success,
            GuessOutcome::Empty | GuessOutcome::AlreadyFound => MessageStyle::Info,
            _ => MessageStyle::Error,
        };
        self.add_message(&outcome.message(), style);

        if outcome.is_hit() {
            self.stats.words_found += 1;
        }
        if outcome == GuessOutcome::Completed {
            self.finish_game();
        }
    }

    pub fn reshuffle(&mut self) {
        if self.session.has_game() {
            self.session.reshuffle(&mut self.engine);
        } else {
            self.add_message("No game in progress.", MessageStyle::Error);
        }
    }

    fn finish_game(&mut self) {
        self.stats.games_completed += 1;
        self.input_mode = InputMode::Completed;
        info!(completed = self.stats.games_completed, "puzzle completed");
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Completed => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Tab => self.reshuffle(),
                KeyCode::Char(c) if c.is_alphabetic() => {
                    self.session.push_guess_char(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => self.session.pop_guess_char(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
