//! Dictionary queries
//!
//! Pure functions over an immutable dictionary. Invalid or blank input yields
//! an empty result, never an error.

use crate::core::Dictionary;
use crate::core::dictionary::{char_len, normalize};
use std::collections::BTreeSet;

/// Case-insensitive, whitespace-tolerant membership test
#[must_use]
pub fn exists(dictionary: &Dictionary, word: &str) -> bool {
    let word = normalize(word);
    !word.is_empty() && dictionary.contains(&word)
}

/// Every word starting with `prefix`, in dictionary order
///
/// The prefix must be non-empty and made only of ASCII letters; anything else
/// matches nothing.
#[must_use]
pub fn words_matching_prefix<'a>(dictionary: &'a Dictionary, prefix: &str) -> Vec<&'a str> {
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Vec::new();
    }

    let prefix = prefix.to_ascii_lowercase();
    dictionary
        .iter()
        .filter(|word| word.starts_with(&prefix))
        .collect()
}

/// Every word matching all supplied constraints
///
/// `start` and `end` compare case-insensitively against the first and last
/// character; `length` counts characters and is ignored when zero. With no
/// usable constraint at all the result is empty rather than the whole
/// dictionary.
#[must_use]
pub fn search_words<'a>(
    dictionary: &'a Dictionary,
    start: Option<char>,
    end: Option<char>,
    length: Option<usize>,
) -> Vec<&'a str> {
    let length = length.filter(|&length| length > 0);
    if start.is_none() && end.is_none() && length.is_none() {
        return Vec::new();
    }

    let start = start.map(fold_case);
    let end = end.map(fold_case);

    dictionary
        .iter()
        .filter(|word| start.is_none_or(|c| word.chars().next() == Some(c)))
        .filter(|word| end.is_none_or(|c| word.chars().next_back() == Some(c)))
        .filter(|word| length.is_none_or(|length| char_len(word) == length))
        .collect()
}

/// Every contiguous substring of `word` with at least `min_length` characters
/// that is a dictionary word
///
/// Substrings keep the case of `word`, so pass lowercase input. The whole word
/// counts as one of its own substrings. A `min_length` of zero behaves like one.
#[must_use]
pub fn generate_sub_words(
    dictionary: &Dictionary,
    word: &str,
    min_length: usize,
) -> BTreeSet<String> {
    let min_length = min_length.max(1);

    // Byte offset of every character boundary, including the end
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(word.len()))
        .collect();
    let chars = bounds.len() - 1;

    let mut sub_words = BTreeSet::new();
    if chars < min_length {
        return sub_words;
    }

    for start in 0..=chars - min_length {
        for end in start + min_length..=chars {
            let candidate = &word[bounds[start]..bounds[end]];
            if dictionary.contains(candidate) {
                sub_words.insert(candidate.to_string());
            }
        }
    }

    sub_words
}

/// Sub-words a player can find in `word`: every sub-word except `word` itself
#[must_use]
pub fn puzzle_sub_words(
    dictionary: &Dictionary,
    word: &str,
    min_length: usize,
) -> BTreeSet<String> {
    let mut sub_words = generate_sub_words(dictionary, word, min_length);
    sub_words.remove(word);
    sub_words
}

/// Every word longer than one character that reads the same backwards
#[must_use]
pub fn retrieve_palindrome_words(dictionary: &Dictionary) -> Vec<&str> {
    dictionary.iter().filter(|word| is_palindrome(word)).collect()
}

/// Palindrome test on characters; single characters do not count
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    char_len(word) > 1 && word.chars().eq(word.chars().rev())
}

/// Words with exactly `length` characters
pub(crate) fn words_of_length(dictionary: &Dictionary, length: usize) -> Vec<&str> {
    dictionary
        .iter()
        .filter(|word| char_len(word) == length)
        .collect()
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
