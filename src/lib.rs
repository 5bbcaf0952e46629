//! Wordly
//!
//! A word-guessing game: guess a hidden word of configurable length within a
//! fixed number of attempts, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use wordly::core::{Mark, Word, evaluate};
//! use wordly::game::{GuessRow, Outcome, Session};
//!
//! // Evaluate a guess on its own
//! let guess = Word::new("apple").unwrap();
//! let secret = Word::new("grape").unwrap();
//! let feedback = evaluate(&guess, &secret).unwrap();
//! assert_eq!(feedback.marks()[4], Mark::Exact);
//!
//! // Or play a full game
//! let mut session = Session::new(secret, NonZeroUsize::new(6).unwrap());
//! let outcome = session.submit_row(&GuessRow::from(&guess)).unwrap();
//! assert!(matches!(outcome, Outcome::Continue { next_row: 1, .. }));
//! ```

// Core domain types
pub mod core;

// Game session state machine and setup
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
