//! Formatting utilities for terminal output

use crate::core::GameState;

/// Separate letters with spaces so a scramble reads as tiles
#[must_use]
pub fn spaced(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Hide a word behind one underscore per letter
#[must_use]
pub fn masked(word: &str) -> String {
    spaced(&"_".repeat(word.chars().count()))
}

/// One line per checklist entry: found words in full, hidden ones masked
#[must_use]
pub fn checklist_lines(state: &GameState) -> Vec<String> {
    state
        .sub_words()
        .iter()
        .map(|(word, &guessed)| {
            if guessed {
                format!("✓ {word}")
            } else {
                format!("  {}", masked(word))
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
