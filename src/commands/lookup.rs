//! One-shot dictionary commands
//!
//! Each query maps onto a single engine call; the result is plain data for the
//! output layer to print.

use crate::engine::JumbleEngine;
use rand::Rng;

/// A single engine call requested from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Scramble(String),
    Exists(String),
    Prefix(String),
    Search {
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    },
    SubWords {
        word: String,
        min_length: usize,
    },
    Palindromes,
    Random(usize),
}

/// Result of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Scrambled { word: String, scramble: String },
    Membership { word: String, found: bool },
    Words { label: String, words: Vec<String> },
    Picked { length: usize, word: Option<String> },
}

/// Run a query against the engine
pub fn run_query<R: Rng>(engine: &mut JumbleEngine<'_, R>, query: Query) -> QueryResult {
    match query {
        Query::Scramble(word) => {
            let scramble = engine.scramble(&word);
            QueryResult::Scrambled { word, scramble }
        }
        Query::Exists(word) => {
            let found = engine.exists(&word);
            QueryResult::Membership { word, found }
        }
        Query::Prefix(prefix) => QueryResult::Words {
            label: format!("Words starting with '{prefix}'"),
            words: owned(engine.words_matching_prefix(&prefix)),
        },
        Query::Search { start, end, length } => QueryResult::Words {
            label: search_label(start, end, length),
            words: owned(engine.search_words(start, end, length)),
        },
        Query::SubWords { word, min_length } => QueryResult::Words {
            label: format!("Sub-words of '{word}' with at least {min_length} letters"),
            words: engine
                .generate_sub_words(&word.to_lowercase(), min_length)
                .into_iter()
                .collect(),
        },
        Query::Palindromes => QueryResult::Words {
            label: "Palindromes".to_string(),
            words: owned(engine.retrieve_palindrome_words()),
        },
        Query::Random(length) => QueryResult::Picked {
            length,
            word: engine.pick_one_random_word(Some(length)).map(str::to_string),
        },
    }
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

fn search_label(start: Option<char>, end: Option<char>, length: Option<usize>) -> String {
    let mut criteria = Vec::new();
    if let Some(c) = start {
        criteria.push(format!("starting with '{c}'"));
    }
    if let Some(c) = end {
        criteria.push(format!("ending with '{c}'"));
    }
    if let Some(length) = length.filter(|&length| length > 0) {
        criteria.push(format!("{length} letters long"));
    }

    if criteria.is_empty() {
        "Words (no criteria given)".to_string()
    } else {
        format!("Words {}", criteria.join(", "))
    }
}
