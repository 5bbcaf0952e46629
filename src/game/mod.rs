//! Game state
//!
//! Setup, row entry and the session state machine that drives a single game.

mod config;
mod row;
mod session;

pub use config::{ConfigError, DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig};
pub use row::GuessRow;
pub use session::{Attempt, Outcome, Phase, Session, SessionError};
