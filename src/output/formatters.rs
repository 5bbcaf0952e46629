//! Formatting utilities for terminal output
//!
//! Stateless rendering of a guess and its feedback. Nothing here knows about
//! sessions; callers pass the row and feedback they want drawn.

use crate::core::{Mark, Word};
use crate::game::Attempt;
use colored::{Color, ColoredString, Colorize};

/// Background color for a mark: green, yellow or gray
#[must_use]
pub const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::BrightBlack,
    }
}

/// One colored letter tile
#[must_use]
pub fn tile(letter: char, mark: Mark) -> ColoredString {
    format!(" {letter} ")
        .bold()
        .white()
        .on_color(mark_color(mark))
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, marks: &[Mark]) -> String {
    guess
        .letters()
        .iter()
        .zip(marks)
        .map(|(letter, &mark)| tile(letter.as_char(), mark).to_string())
        .collect()
}

/// Numbered history lines like "1. APPLE 🟨🟨⬜⬜🟩"
#[must_use]
pub fn history_lines(attempts: &[Attempt]) -> Vec<String> {
    attempts
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            format!(
                "{}. {} {}",
                i + 1,
                attempt.guess,
                attempt.feedback.to_emoji()
            )
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, evaluate};

    #[test]
    fn mark_colors() {
        assert_eq!(mark_color(Mark::Exact), Color::Green);
        assert_eq!(mark_color(Mark::Present), Color::Yellow);
        assert_eq!(mark_color(Mark::Absent), Color::BrightBlack);
    }

    #[test]
    fn colored_row_contains_every_letter() {
        let guess = Word::new("apple").unwrap();
        let secret = Word::new("grape").unwrap();
        let feedback = evaluate(&guess, &secret).unwrap();

        let row = colored_row(&guess, feedback.marks());
        for ch in ['A', 'P', 'L', 'E'] {
            assert!(row.contains(ch));
        }
    }

    #[test]
    fn history_lines_are_numbered() {
        let attempts = vec![
            Attempt {
                guess: Word::new("apple").unwrap(),
                feedback: Feedback::new(vec![
                    Mark::Present,
                    Mark::Present,
                    Mark::Absent,
                    Mark::Absent,
                    Mark::Exact,
                ]),
            },
            Attempt {
                guess: Word::new("grape").unwrap(),
                feedback: Feedback::perfect(5),
            },
        ];

        assert_eq!(
            history_lines(&attempts),
            vec!["1. APPLE 🟨🟨⬜⬜🟩", "2. GRAPE 🟩🟩🟩🟩🟩"]
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
