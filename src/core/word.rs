//! Letters and words
//!
//! A [`Word`] is a non-empty sequence of uppercase ASCII [`Letter`]s. Its length is
//! chosen by the game configuration rather than fixed at five.

use rustc_hash::FxHashMap;
use std::fmt;

/// A single uppercase letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordly::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert!(Letter::new('4').is_none());
    /// ```
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Get the letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A word of any positive length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
    WrongLength { expected: usize, actual: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters,
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordly::core::Word;
    ///
    /// let word = Word::new("grape").unwrap();
    /// assert_eq!(word.text(), "GRAPE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("gr4pe").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters = text
            .chars()
            .map(Letter::new)
            .collect::<Option<Vec<_>>>()
            .ok_or(WordError::InvalidCharacters)?;

        Ok(Self::from_letters(letters))
    }

    /// Create a Word and require a specific length
    ///
    /// # Errors
    /// Returns `WordError::WrongLength` if the word is valid but has the wrong
    /// number of letters, or any error from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == expected {
            Ok(word)
        } else {
            Err(WordError::WrongLength {
                expected,
                actual: word.len(),
            })
        }
    }

    /// Build a word from already-validated letters
    ///
    /// Callers must pass at least one letter.
    pub(crate) fn from_letters(letters: Vec<Letter>) -> Self {
        debug_assert!(!letters.is_empty(), "Word must not be empty");
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: words have at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<Letter, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
