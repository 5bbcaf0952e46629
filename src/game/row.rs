//! Guess row under construction
//!
//! A row holds one optional letter per column. Frontends fill it cell by cell and
//! hand it to the session once every cell is filled.

use crate::core::{Letter, Word};

/// One row of input cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    cells: Vec<Option<Letter>>,
}

impl GuessRow {
    /// Create an empty row with `len` cells
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Create a row from typed text, one cell per column
    ///
    /// Characters that are not letters leave their cell empty. Text shorter
    /// than `len` leaves trailing cells empty; extra characters are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordly::game::GuessRow;
    ///
    /// let row = GuessRow::from_text("gra", 5);
    /// assert_eq!(row.filled(), 3);
    /// assert!(!row.is_complete());
    /// ```
    #[must_use]
    pub fn from_text(text: &str, len: usize) -> Self {
        let mut row = Self::new(len);
        for (cell, ch) in row.cells.iter_mut().zip(text.chars()) {
            *cell = Letter::new(ch);
        }
        row
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in column order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<Letter>] {
        &self.cells
    }

    /// Fill the first empty cell, returning false when the row is full
    pub fn push(&mut self, letter: Letter) -> bool {
        match self.cells.iter_mut().find(|cell| cell.is_none()) {
            Some(cell) => {
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the last filled cell and return its letter
    pub fn pop(&mut self) -> Option<Letter> {
        self.cells.iter_mut().rev().find_map(Option::take)
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check whether every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(Option::is_some)
    }

    /// Convert a complete row into a word
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        if self.cells.is_empty() {
            return None;
        }
        self.cells
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .map(Word::from_letters)
    }
}

impl From<&Word> for GuessRow {
    fn from(word: &Word) -> Self {
        Self {
            cells: word.letters().iter().copied().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn new_row_is_empty() {
        let row = GuessRow::new(5);
        assert_eq!(row.len(), 5);
        assert_eq!(row.filled(), 0);
        assert!(!row.is_complete());
        assert!(row.to_word().is_none());
    }

    #[test]
    fn push_fills_left_to_right_until_full() {
        let mut row = GuessRow::new(3);
        assert!(row.push(letter('f')));
        assert!(row.push(letter('i')));
        assert!(row.push(letter('g')));
        assert!(!row.push(letter('s')));
        assert!(row.is_complete());
        assert_eq!(row.to_word().unwrap().text(), "FIG");
    }

    #[test]
    fn pop_clears_last_filled_cell() {
        let mut row = GuessRow::from_text("lime", 4);
        assert_eq!(row.pop(), Some(letter('E')));
        assert_eq!(row.filled(), 3);
        assert_eq!(row.cells()[3], None);

        let mut empty = GuessRow::new(2);
        assert_eq!(empty.pop(), None);
    }

    #[test]
    fn pop_skips_gaps() {
        let mut row = GuessRow::from_text(" x", 4);
        assert_eq!(row.pop(), Some(letter('X')));
        assert_eq!(row.filled(), 0);
    }

    #[test]
    fn row_with_gap_is_not_complete() {
        let row = GuessRow::from_text("lo ly", 5);
        assert_eq!(row.filled(), 4);
        assert!(!row.is_complete());
        assert!(row.to_word().is_none());
    }

    #[test]
    fn from_text_leaves_invalid_and_missing_cells_empty() {
        let row = GuessRow::from_text("p3ar", 5);
        assert_eq!(row.filled(), 3);
        assert_eq!(row.cells()[1], None);
        assert_eq!(row.cells()[4], None);

        let long = GuessRow::from_text("cherry", 4);
        assert_eq!(long.to_word().unwrap().text(), "CHER");
    }

    #[test]
    fn from_word_round_trips() {
        let word = Word::new("basil").unwrap();
        let row = GuessRow::from(&word);
        assert!(row.is_complete());
        assert_eq!(row.to_word(), Some(word));
    }
}
