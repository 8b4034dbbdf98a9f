//! Normalized, read-only word collection
//!
//! Words are trimmed and lowercased on the way in. Load order is kept for
//! iteration, and a hash index answers membership queries.

use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Immutable dictionary of normalized words
///
/// Iteration follows load order with duplicates dropped (first occurrence wins).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

/// Normalize a raw entry: trim surrounding whitespace and lowercase
#[inline]
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in characters
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words([" Apple ", "cat", "", "CAT"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("apple"));
    /// ```
    pub fn from_words<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in raw {
            let word = normalize(entry.as_ref());
            if word.is_empty() {
                continue;
            }
            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        Self { words, index }
    }

    /// Load a dictionary from a file, one word per line
    ///
    /// Never fails: a missing or unreadable file is logged and an empty
    /// dictionary is returned.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match crate::wordlists::loader::load_from_file(path) {
            Ok(dictionary) => {
                debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
                dictionary
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read word list, starting with an empty dictionary");
                Self::default()
            }
        }
    }

    /// Exact membership test on an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Iterate over the words in load order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
