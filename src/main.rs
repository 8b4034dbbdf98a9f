//! Jumble - CLI
//!
//! Word-puzzle engine with TUI and CLI modes: scramble words, query the
//! dictionary and play the unscramble game.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use jumble::{
    commands::{GameSettings, Query, SurveyConfig, run_query, run_simple, run_survey},
    core::{DEFAULT_MIN_LENGTH, Dictionary},
    engine::JumbleEngine,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::{print_game_state, print_query_result, print_survey_result},
    wordlists::loader::bundled,
};
use std::path::PathBuf;
use tracing::info;

/// Target length used when none is given
const DEFAULT_LENGTH: usize = 6;

#[derive(Parser)]
#[command(
    name = "jumble",
    about = "Word scrambles, dictionary queries and an unscramble game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed the random source for reproducible scrambles and puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Clone, Copy)]
struct GameArgs {
    /// Length of the target word
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Minimum length of the hidden words (default: 3)
    #[arg(short, long)]
    min: Option<usize>,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            min: None,
        }
    }
}

impl From<GameArgs> for GameSettings {
    fn from(args: GameArgs) -> Self {
        Self {
            length: args.length,
            min_length: args.min,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play(GameArgs),

    /// Simple CLI game (line-based, no TUI)
    Simple(GameArgs),

    /// Build one puzzle and print it with every answer
    New(GameArgs),

    /// Scramble a word
    Scramble {
        /// Word to scramble
        word: String,
    },

    /// Check whether a word is in the dictionary
    Exists {
        /// Word to look up
        word: String,
    },

    /// List words starting with a prefix
    Prefix {
        /// Alphabetic prefix
        prefix: String,
    },

    /// List words by first letter, last letter and length
    Search {
        /// First character
        #[arg(short, long)]
        start: Option<char>,

        /// Last character
        #[arg(short, long)]
        end: Option<char>,

        /// Exact length (0 means any)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List the dictionary words hidden inside a word
    Subwords {
        /// Word to search inside
        word: String,

        /// Minimum sub-word length
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min: usize,
    },

    /// List every palindrome
    Palindromes,

    /// Pick a random word of the given length
    Random {
        /// Word length
        length: usize,
    },

    /// Count hidden words for every word of a length
    Survey {
        /// Target word length
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Minimum sub-word length
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min: usize,

        /// Number of richest words to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// A missing or unreadable file yields an empty dictionary with a warning.
fn load_dictionary(path: Option<&PathBuf>) -> Dictionary {
    path.map_or_else(bundled, Dictionary::load_or_empty)
}

fn build_engine(dictionary: &Dictionary, seed: Option<u64>) -> JumbleEngine<'_> {
    match seed {
        Some(seed) => JumbleEngine::seeded(dictionary, seed),
        None => JumbleEngine::new(dictionary),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(GameArgs::default()));

    let log_target = if matches!(command, Commands::Play(_)) {
        LogTarget::tui_default()
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, &log_target)?;

    let dictionary = load_dictionary(cli.words.as_ref());
    info!(words = dictionary.len(), "dictionary ready");
    let mut engine = build_engine(&dictionary, cli.seed);

    let query = match command {
        Commands::Play(args) => return run_tui(App::new(engine, args.into())),
        Commands::Simple(args) => return run_simple(&mut engine, args.into()),
        Commands::New(args) => {
            let state = engine.create_game_state(args.length, args.min)?;
            print_game_state(&state);
            return Ok(());
        }
        Commands::Survey { length, min, top } => {
            let config = SurveyConfig {
                length,
                min_length: min,
                top,
                show_progress: true,
            };
            print_survey_result(&run_survey(&dictionary, &config));
            return Ok(());
        }
        Commands::Scramble { word } => Query::Scramble(word),
        Commands::Exists { word } => Query::Exists(word),
        Commands::Prefix { prefix } => Query::Prefix(prefix),
        Commands::Search { start, end, length } => Query::Search { start, end, length },
        Commands::Subwords { word, min } => Query::SubWords {
            word,
            min_length: min,
        },
        Commands::Palindromes => Query::Palindromes,
        Commands::Random { length } => Query::Random(length),
    };

    print_query_result(&run_query(&mut engine, query));
    Ok(())
}
