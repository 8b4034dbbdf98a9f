//! Dictionary survey
//!
//! Counts the findable sub-words of every word of a given length to show which
//! game settings make for playable puzzles.

use crate::core::Dictionary;
use crate::core::dictionary::char_len;
use crate::engine::query::puzzle_sub_words;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Survey settings
pub struct SurveyConfig {
    pub length: usize,
    pub min_length: usize,
    pub top: usize,
    pub show_progress: bool,
}

/// Survey report for one word length
#[derive(Debug)]
pub struct SurveyResult {
    pub length: usize,
    pub min_length: usize,
    pub total_words: usize,
    pub playable: usize,
    pub average_sub_words: f64,
    pub richest: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Survey every word of `config.length` characters
///
/// # Panics
///
/// Never in practice: the progress template is a fixed, valid string.
#[must_use]
pub fn run_survey(dictionary: &Dictionary, config: &SurveyConfig) -> SurveyResult {
    let start = Instant::now();

    let targets: Vec<&str> = dictionary
        .iter()
        .filter(|word| char_len(word) == config.length)
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{}-letter words", config.length));

    let mut counts: Vec<(String, usize)> = targets
        .par_iter()
        .map(|&word| {
            let count = puzzle_sub_words(dictionary, word, config.min_length).len();
            pb.inc(1);
            (word.to_string(), count)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_words = counts.len();
    let playable = counts.iter().filter(|(_, count)| *count > 0).count();
    let total_sub_words: usize = counts.iter().map(|(_, count)| count).sum();
    let average_sub_words = if total_words == 0 {
        0.0
    } else {
        total_sub_words as f64 / total_words as f64
    };

    counts.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    counts.truncate(config.top);

    let duration = start.elapsed();
    debug!(
        length = config.length,
        total_words,
        playable,
        ?duration,
        "survey finished"
    );

    SurveyResult {
        length: config.length,
        min_length: config.min_length,
        total_words,
        playable,
        average_sub_words,
        richest: counts,
        duration,
    }
}
