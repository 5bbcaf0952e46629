//! Interactive TUI interface
//!
//! A ratatui frontend that turns key presses into row submissions.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{board_lines, ui};
