//! Word list loading utilities
//!
//! Builds dictionaries from files or from the embedded constant.

use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Use
/// [`Dictionary::load_or_empty`] for the fail-soft variant.
///
/// # Examples
/// ```no_run
/// use jumble::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use jumble::wordlists::loader::dictionary_from_slice;
/// use jumble::wordlists::WORDS;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert!(dictionary.contains("planet"));
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}

/// The bundled dictionary
#[must_use]
pub fn bundled() -> Dictionary {
    dictionary_from_slice(super::WORDS)
}
