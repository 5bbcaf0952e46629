//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and invalid
/// entries. Words of any length are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordly::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secrets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse one word per line, skipping anything that is not a valid word
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordly::wordlists::loader::words_from_slice;
/// use wordly::wordlists::SECRETS;
///
/// let words = words_from_slice(SECRETS);
/// assert_eq!(words.len(), SECRETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["grape", "kiwi", "banana"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "GRAPE");
        assert_eq!(words[1].text(), "KIWI");
        assert_eq!(words[2].text(), "BANANA");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["grape", "k1wi", "", "lime"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "GRAPE");
        assert_eq!(words[1].text(), "LIME");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_word_list_skips_blank_and_invalid_lines() {
        let words = parse_word_list("apple\n\n  pear  \nno way\nfig\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "PEAR", "FIG"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordly/words.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordly_loader_{}.txt", std::process::id()));
        fs::write(&path, "melon\nguava\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "GUAVA");
    }
}
