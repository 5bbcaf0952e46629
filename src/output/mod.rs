//! Terminal output formatting
//!
//! Display utilities for the line-based frontends.

pub mod display;
pub mod formatters;

pub use display::{print_score, write_outcome, write_reveal, write_row};
