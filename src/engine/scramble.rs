//! Letter scrambling
//!
//! Produces a uniformly random permutation of a word that differs from the
//! word itself whenever such a permutation exists.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Shuffles tried before falling back to a deterministic swap
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 32;

/// Scramble `word` using `rng`
///
/// Words of zero or one character are returned unchanged. A word made of a
/// single repeated character has no distinct permutation and is also returned
/// unchanged. Every other word comes back as a permutation of its characters
/// that is not equal to the input.
///
/// # Examples
/// ```
/// use jumble::engine::scramble_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble_with("planet", &mut rng);
/// assert_ne!(scrambled, "planet");
/// assert_eq!(scrambled.len(), 6);
/// ```
pub fn scramble_with<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return word.to_string();
    }

    // No permutation can differ from the input
    if first_distinct_pair(&original).is_none() {
        debug!(word, "all characters identical, scramble is the word itself");
        return word.to_string();
    }

    let mut letters = original.clone();
    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    warn!(
        word,
        attempts = MAX_SCRAMBLE_ATTEMPTS,
        "shuffle kept reproducing the word, swapping adjacent letters instead"
    );
    swap_first_distinct(original)
}

/// Swap the first pair of differing neighbours, which always changes the word
fn swap_first_distinct(mut letters: Vec<char>) -> String {
    if let Some(split) = first_distinct_pair(&letters) {
        letters.swap(split, split + 1);
    }
    letters.into_iter().collect()
}

/// Index of the first character that differs from its right neighbour
fn first_distinct_pair(letters: &[char]) -> Option<usize> {
    letters.windows(2).position(|pair| pair[0] != pair[1])
}
