//! One-off evaluation of a guess against a secret

use crate::core::{Feedback, Word, evaluate};
use anyhow::{Context, Result};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret` without starting a game
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let feedback = evaluate(&guess, &secret)?;

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EvaluateError;

    #[test]
    fn score_matches_evaluator() {
        let result = score_guess("apple", "grape").unwrap();
        assert_eq!(result.guess.text(), "APPLE");
        assert_eq!(result.feedback.to_string(), "YY--G");
    }

    #[test]
    fn score_rejects_length_mismatch() {
        let err = score_guess("kiwi", "grape").unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvaluateError>(),
            Some(&EvaluateError::InvalidLength {
                guess: 4,
                secret: 5
            })
        );
    }

    #[test]
    fn score_rejects_invalid_word() {
        let err = score_guess("gr4pe", "grape").unwrap_err();
        assert!(err.to_string().contains("invalid guess"));
    }
}
