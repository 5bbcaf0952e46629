//! Core domain types for the game
//!
//! Letters, words and the guess evaluator. Everything here is pure and has no
//! knowledge of sessions or terminals.

mod feedback;
mod word;

pub use feedback::{EvaluateError, Feedback, Mark, evaluate};
pub use word::{Letter, Word, WordError};
