//! Word lists and secret selection
//!
//! Provides the embedded list of candidate secrets and picks a secret of the
//! requested length.

mod embedded;
pub mod loader;

pub use embedded::{SECRETS, SECRETS_COUNT};

use crate::core::{Letter, Word};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Pick a secret word of `length` letters
///
/// Chooses uniformly among the pool words of that length. When the pool has
/// none, builds a word from random letters: distinct letters (a shuffled
/// alphabet prefix) for lengths up to 26, letters with repetition beyond that.
///
/// Returns `None` only for `length == 0`.
pub fn pick_secret<R: Rng + ?Sized>(pool: &[Word], length: usize, rng: &mut R) -> Option<Word> {
    if length == 0 {
        return None;
    }

    let candidates: Vec<&Word> = pool.iter().filter(|w| w.len() == length).collect();
    if let Some(&word) = candidates.choose(rng) {
        return Some(word.clone());
    }

    Some(random_letters(length, rng))
}

fn random_letters<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Word {
    let bytes: Vec<u8> = if length <= ALPHABET.len() {
        let mut alphabet = *ALPHABET;
        alphabet.shuffle(rng);
        alphabet[..length].to_vec()
    } else {
        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
            .collect()
    };

    let letters = bytes
        .into_iter()
        .filter_map(|b| Letter::new(char::from(b)))
        .collect();
    Word::from_letters(letters)
}
