//! Game setup
//!
//! Validates the word length, guess budget and optional forced secret, then
//! builds a [`Session`].

use super::Session;
use crate::core::{Word, WordError};
use crate::wordlists::pick_secret;
use rand::Rng;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for starting a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    /// Forced secret word, mostly for testing; picked randomly when `None`
    pub secret: Option<String>,
}

/// Error type for invalid game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotPositive(&'static str),
    InvalidSecret(WordError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive(field) => write!(f, "Number of {field} must be a positive integer"),
            Self::InvalidSecret(err) => write!(
                f,
                "Custom secret word must be alphabetic and match length: {err}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSecret(err) => Some(err),
            Self::NotPositive(_) => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            secret: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(word_length: usize, max_guesses: usize, secret: Option<String>) -> Self {
        Self {
            word_length,
            max_guesses,
            secret,
        }
    }

    /// Check the settings without starting a game
    ///
    /// # Errors
    /// Returns `ConfigError` if a count is zero or the forced secret is not
    /// an alphabetic word of `word_length` letters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_budget()?;
        self.forced_secret()?;
        Ok(())
    }

    /// Validate and build a new session
    ///
    /// Uses the forced secret when present, otherwise picks one from `pool`.
    ///
    /// # Errors
    /// Returns `ConfigError` under the same conditions as [`GameConfig::validate`].
    pub fn start<R: Rng + ?Sized>(
        &self,
        pool: &[Word],
        rng: &mut R,
    ) -> Result<Session, ConfigError> {
        let max_guesses = self.checked_budget()?;
        let secret = match self.forced_secret()? {
            Some(word) => word,
            None => pick_secret(pool, self.word_length, rng)
                .ok_or(ConfigError::NotPositive("letters"))?,
        };

        debug!(secret = %secret, forced = self.secret.is_some(), "secret chosen");
        Ok(Session::new(secret, max_guesses))
    }

    fn checked_budget(&self) -> Result<NonZeroUsize, ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::NotPositive("letters"));
        }
        NonZeroUsize::new(self.max_guesses).ok_or(ConfigError::NotPositive("guesses"))
    }

    fn forced_secret(&self) -> Result<Option<Word>, ConfigError> {
        match self.secret.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => Word::with_length(text, self.word_length)
                .map(Some)
                .map_err(ConfigError::InvalidSecret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crate::wordlists::SECRETS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_counts_rejected() {
        assert_eq!(
            GameConfig::new(0, 6, None).validate(),
            Err(ConfigError::NotPositive("letters"))
        );
        assert_eq!(
            GameConfig::new(5, 0, None).validate(),
            Err(ConfigError::NotPositive("guesses"))
        );
    }

    #[test]
    fn forced_secret_must_match_length() {
        let config = GameConfig::new(5, 6, Some("kiwi".to_string()));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSecret(WordError::WrongLength {
                expected: 5,
                actual: 4
            }))
        );
    }

    #[test]
    fn forced_secret_must_be_alphabetic() {
        let config = GameConfig::new(5, 6, Some("gr4pe".to_string()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSecret(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn blank_forced_secret_means_random() {
        let config = GameConfig::new(5, 6, Some("   ".to_string()));
        let session = config
            .start(&words_from_slice(SECRETS), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(session.word_length(), 5);
    }

    #[test]
    fn start_uses_forced_secret() {
        let config = GameConfig::new(5, 4, Some("peach".to_string()));
        let session = config.start(&[], &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(session.reveal_secret().text(), "PEACH");
        assert_eq!(session.max_guesses(), 4);
        assert_eq!(session.phase(), Phase::InProgress);
    }

    #[test]
    fn start_picks_secret_of_requested_length() {
        let pool = words_from_slice(SECRETS);
        let config = GameConfig::new(6, 6, None);
        let session = config.start(&pool, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(session.word_length(), 6);
        assert!(pool.contains(session.reveal_secret()));
    }

    #[test]
    fn start_rejects_invalid_config() {
        let config = GameConfig::new(5, 0, None);
        assert!(config.start(&[], &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NotPositive("guesses").to_string(),
            "Number of guesses must be a positive integer"
        );
    }
}
