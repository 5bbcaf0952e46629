//! Game session state machine
//!
//! A [`Session`] owns the secret word, the guess budget and the history of
//! evaluated rows. It moves from `InProgress` to either `Won` or `Lost` and never
//! leaves a terminal phase; playing again means building a new session.

use super::GuessRow;
use crate::core::{EvaluateError, Feedback, Word, evaluate};
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

/// Lifecycle stage of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Check whether the game is over
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// A submitted row together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not solved yet; `next_row` is the index of the row to fill next
    Continue { feedback: Feedback, next_row: usize },
    /// The row matched the secret
    Win { feedback: Feedback },
    /// The last attempt was used without a match
    Loss { feedback: Feedback, secret: Word },
}

impl Outcome {
    /// Feedback for the submitted row
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        match self {
            Self::Continue { feedback, .. }
            | Self::Win { feedback }
            | Self::Loss { feedback, .. } => feedback,
        }
    }

    /// Check whether this submission ended the game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue { .. })
    }
}

/// Error returned when a submission is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The row does not have exactly one letter per column
    IncompleteRow { filled: usize, expected: usize },
    /// The game already ended
    SessionTerminated(Phase),
    /// The evaluator rejected the row; unreachable while rows are length-checked
    InvalidLength(EvaluateError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow { filled, expected } => write!(
                f,
                "Please fill all letters ({filled} of {expected} filled)"
            ),
            Self::SessionTerminated(phase) => write!(f, "The game is already {phase}"),
            Self::InvalidLength(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLength(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EvaluateError> for SessionError {
    fn from(err: EvaluateError) -> Self {
        Self::InvalidLength(err)
    }
}

/// One game from first guess to win or loss
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use wordly::core::Word;
/// use wordly::game::{GuessRow, Outcome, Phase, Session};
///
/// let secret = Word::new("grape").unwrap();
/// let mut session = Session::new(secret, NonZeroUsize::new(6).unwrap());
///
/// let outcome = session.submit_row(&GuessRow::from_text("apple", 5)).unwrap();
/// assert!(matches!(outcome, Outcome::Continue { next_row: 1, .. }));
///
/// let outcome = session.submit_row(&GuessRow::from_text("grape", 5)).unwrap();
/// assert!(matches!(outcome, Outcome::Win { .. }));
/// assert_eq!(session.phase(), Phase::Won);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    max_guesses: NonZeroUsize,
    attempts: Vec<Attempt>,
    phase: Phase,
}

impl Session {
    /// Start a new game
    #[must_use]
    pub fn new(secret: Word, max_guesses: NonZeroUsize) -> Self {
        debug!(
            secret = %secret,
            word_length = secret.len(),
            max_guesses = max_guesses.get(),
            "session created"
        );

        Self {
            secret,
            max_guesses,
            attempts: Vec::with_capacity(max_guesses.get()),
            phase: Phase::InProgress,
        }
    }

    /// Submit the next row for evaluation
    ///
    /// On error the session is left untouched.
    ///
    /// # Errors
    /// - `SessionTerminated` if the game is already won or lost
    /// - `IncompleteRow` if the row is not exactly `word_length` filled cells
    pub fn submit_row(&mut self, row: &GuessRow) -> Result<Outcome, SessionError> {
        if self.phase.is_terminal() {
            warn!(phase = %self.phase, "submission after game over");
            return Err(SessionError::SessionTerminated(self.phase));
        }

        let incomplete = || SessionError::IncompleteRow {
            filled: row.filled(),
            expected: self.word_length(),
        };
        if row.len() != self.word_length() || !row.is_complete() {
            return Err(incomplete());
        }
        let guess = row.to_word().ok_or_else(incomplete)?;

        let feedback = evaluate(&guess, &self.secret)?;
        let solved = guess == self.secret;

        debug!(
            row = self.attempts.len(),
            guess = %guess,
            feedback = %feedback,
            "row accepted"
        );

        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });

        let outcome = if solved {
            self.phase = Phase::Won;
            info!(guesses = self.attempts.len(), "game won");
            Outcome::Win { feedback }
        } else if self.attempts.len() == self.max_guesses.get() {
            self.phase = Phase::Lost;
            info!(secret = %self.secret, "game lost");
            Outcome::Loss {
                feedback,
                secret: self.secret.clone(),
            }
        } else {
            Outcome::Continue {
                feedback,
                next_row: self.attempts.len(),
            }
        };

        Ok(outcome)
    }

    /// The secret word; never changes the phase
    #[must_use]
    pub fn reveal_secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the row that will be accepted next
    #[must_use]
    pub fn current_row_index(&self) -> usize {
        self.attempts.len()
    }

    /// Rows submitted so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses.get()
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.get() - self.attempts.len()
    }

    /// Empty row sized for this game
    #[must_use]
    pub fn blank_row(&self) -> GuessRow {
        GuessRow::new(self.word_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Exact, Present};

    fn session(secret: &str, guesses: usize) -> Session {
        Session::new(
            Word::new(secret).unwrap(),
            NonZeroUsize::new(guesses).unwrap(),
        )
    }

    fn row(text: &str) -> GuessRow {
        GuessRow::from_text(text, text.chars().count())
    }

    #[test]
    fn new_session_starts_in_progress() {
        let s = session("grape", 6);
        assert_eq!(s.phase(), Phase::InProgress);
        assert_eq!(s.current_row_index(), 0);
        assert!(s.attempts().is_empty());
        assert_eq!(s.word_length(), 5);
        assert_eq!(s.max_guesses(), 6);
        assert_eq!(s.remaining_guesses(), 6);
        assert_eq!(s.blank_row().len(), 5);
    }

    #[test]
    fn grape_end_to_end() {
        let mut s = session("grape", 6);

        let outcome = s.submit_row(&row("apple")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Continue {
                feedback: Feedback::new(vec![Present, Present, Absent, Absent, Exact]),
                next_row: 1,
            }
        );
        assert_eq!(s.current_row_index(), 1);
        assert_eq!(s.attempts()[0].guess.text(), "APPLE");

        let outcome = s.submit_row(&row("grape")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Win {
                feedback: Feedback::perfect(5)
            }
        );
        assert_eq!(s.phase(), Phase::Won);
        assert_eq!(s.current_row_index(), 2);
    }

    #[test]
    fn incomplete_row_does_not_mutate() {
        let mut s = session("grape", 6);
        s.submit_row(&row("lemon")).unwrap();

        let err = s.submit_row(&GuessRow::from_text("gra", 5)).unwrap_err();
        assert_eq!(
            err,
            SessionError::IncompleteRow {
                filled: 3,
                expected: 5
            }
        );
        assert_eq!(s.current_row_index(), 1);
        assert_eq!(s.attempts().len(), 1);
        assert_eq!(s.phase(), Phase::InProgress);
    }

    #[test]
    fn row_with_gap_is_incomplete() {
        let mut s = session("alloy", 2);
        assert_eq!(
            s.submit_row(&GuessRow::from_text("lo ly", 5)),
            Err(SessionError::IncompleteRow {
                filled: 4,
                expected: 5
            })
        );
        assert_eq!(s.current_row_index(), 0);
        assert!(s.attempts().is_empty());

        let outcome = s.submit_row(&row("lolly")).unwrap();
        assert_eq!(
            outcome.feedback().marks(),
            &[Present, Present, Exact, Absent, Exact]
        );
        s.submit_row(&row("lolly")).unwrap();
        assert_eq!(s.phase(), Phase::Lost);
    }

    #[test]
    fn wrong_length_row_is_incomplete() {
        let mut s = session("grape", 6);
        assert!(matches!(
            s.submit_row(&row("kiwi")),
            Err(SessionError::IncompleteRow {
                filled: 4,
                expected: 5
            })
        ));
        assert!(matches!(
            s.submit_row(&row("cherry")),
            Err(SessionError::IncompleteRow { .. })
        ));
        assert_eq!(s.current_row_index(), 0);
    }

    #[test]
    fn exhausting_guesses_loses_and_reveals() {
        let mut s = session("grape", 3);
        assert!(!s.submit_row(&row("lemon")).unwrap().is_terminal());
        assert!(!s.submit_row(&row("mango")).unwrap().is_terminal());

        let outcome = s.submit_row(&row("peach")).unwrap();
        match outcome {
            Outcome::Loss { secret, feedback } => {
                assert_eq!(secret.text(), "GRAPE");
                assert_eq!(feedback.len(), 5);
            }
            other => panic!("expected loss, got {other:?}"),
        }
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(s.remaining_guesses(), 0);
    }

    #[test]
    fn win_on_last_row_beats_loss() {
        let mut s = session("grape", 2);
        s.submit_row(&row("apple")).unwrap();
        let outcome = s.submit_row(&row("grape")).unwrap();
        assert!(matches!(outcome, Outcome::Win { .. }));
        assert_eq!(s.phase(), Phase::Won);
    }

    #[test]
    fn single_guess_session() {
        let mut s = session("q", 1);
        let outcome = s.submit_row(&row("z")).unwrap();
        assert!(matches!(outcome, Outcome::Loss { .. }));
    }

    #[test]
    fn terminal_session_rejects_rows() {
        let mut s = session("grape", 6);
        s.submit_row(&row("grape")).unwrap();

        let err = s.submit_row(&row("apple")).unwrap_err();
        assert_eq!(err, SessionError::SessionTerminated(Phase::Won));
        assert_eq!(s.attempts().len(), 1);

        let mut lost = session("grape", 1);
        lost.submit_row(&row("apple")).unwrap();
        assert_eq!(
            lost.submit_row(&row("grape")),
            Err(SessionError::SessionTerminated(Phase::Lost))
        );
        assert_eq!(lost.attempts().len(), 1);
    }

    #[test]
    fn terminated_check_precedes_completeness() {
        let mut s = session("grape", 1);
        s.submit_row(&row("grape")).unwrap();
        assert!(matches!(
            s.submit_row(&GuessRow::new(5)),
            Err(SessionError::SessionTerminated(_))
        ));
    }

    #[test]
    fn resubmitting_same_row_uses_another_attempt() {
        let mut s = session("grape", 6);
        s.submit_row(&row("apple")).unwrap();
        s.submit_row(&row("apple")).unwrap();
        assert_eq!(s.current_row_index(), 2);
    }

    #[test]
    fn reveal_secret_keeps_phase() {
        let mut s = session("grape", 6);
        s.submit_row(&row("lemon")).unwrap();
        assert_eq!(s.reveal_secret().text(), "GRAPE");
        assert_eq!(s.phase(), Phase::InProgress);
        assert!(s.submit_row(&row("grape")).is_ok());
    }

    #[test]
    fn error_messages() {
        let err = SessionError::IncompleteRow {
            filled: 2,
            expected: 5,
        };
        assert_eq!(err.to_string(), "Please fill all letters (2 of 5 filled)");
        assert_eq!(
            SessionError::SessionTerminated(Phase::Lost).to_string(),
            "The game is already lost"
        );
    }
}
