//! Guess evaluation and feedback representation
//!
//! Feedback is one [`Mark`] per position of the guess:
//! - `Exact` (green): right letter, right position
//! - `Present` (yellow): letter occurs elsewhere among unmatched secret letters
//! - `Absent` (gray): no unmatched occurrence left in the secret

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Single-character code used by [`Feedback`]'s text format
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, aligned positionally with the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

/// Error returned when guess and secret lengths differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluateError {
    InvalidLength { guess: usize, secret: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { guess, secret } => write!(
                f,
                "Guess has {guess} letters but the secret has {secret}"
            ),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from the pool
/// 2. Count the secret letters left in the pool
/// 3. Second pass, left to right: mark present letters while the pool has
///    copies left, everything else is absent
///
/// # Errors
/// Returns `EvaluateError::InvalidLength` if the words differ in length.
///
/// # Examples
/// ```
/// use wordly::core::{evaluate, Mark, Word};
///
/// let guess = Word::new("apple").unwrap();
/// let secret = Word::new("grape").unwrap();
/// let feedback = evaluate(&guess, &secret).unwrap();
///
/// assert_eq!(
///     feedback.marks(),
///     &[Mark::Present, Mark::Present, Mark::Absent, Mark::Absent, Mark::Exact]
/// );
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Feedback, EvaluateError> {
    if guess.len() != secret.len() {
        return Err(EvaluateError::InvalidLength {
            guess: guess.len(),
            secret: secret.len(),
        });
    }

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut available = secret.letter_counts();

    // First pass: exact matches consume their secret letter
    for ((mark, g), s) in marks
        .iter_mut()
        .zip(guess.letters())
        .zip(secret.letters())
    {
        if g == s {
            *mark = Mark::Exact;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters, bounded by what is left
    for (mark, letter) in marks.iter_mut().zip(guess.letters()) {
        if *mark == Mark::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            *mark = Mark::Present;
            *count -= 1;
        }
    }

    Ok(Feedback(marks))
}

impl Feedback {
    /// Create feedback from marks
    #[must_use]
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All-exact feedback of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Mark::Exact; len])
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count the number of exact (green) marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of present (yellow) marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}
