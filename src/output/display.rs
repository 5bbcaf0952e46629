//! Display functions for game results

use super::formatters::{colored_row, create_progress_bar, history_lines};
use crate::core::{Feedback, Word};
use crate::game::{Outcome, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Write the submitted row as colored tiles plus the attempts gauge
///
/// # Errors
/// Returns any error from the writer.
pub fn write_row<W: Write>(
    out: &mut W,
    guess: &Word,
    feedback: &Feedback,
    session: &Session,
) -> io::Result<()> {
    writeln!(
        out,
        "  {}  {}  [{}] {}/{}",
        colored_row(guess, feedback.marks()),
        feedback.to_emoji(),
        create_progress_bar(session.current_row_index(), session.max_guesses(), 12),
        session.current_row_index(),
        session.max_guesses()
    )
}

/// Write the banner for a finished game, or nothing for `Continue`
///
/// # Errors
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    session: &Session,
) -> io::Result<()> {
    match outcome {
        Outcome::Continue { .. } => return Ok(()),
        Outcome::Win { .. } => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!("  You win! You guessed: {}", session.reveal_secret())
                    .bright_green()
                    .bold()
            )?;
            let guesses = session.current_row_index();
            writeln!(
                out,
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Loss { secret, .. } => {
            writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
            writeln!(
                out,
                "{}",
                format!("  Game over. No guesses left. The word was: {secret}")
                    .red()
                    .bold()
            )?;
        }
    }

    writeln!(out, "\n  Guess history:")?;
    for line in history_lines(session.attempts()) {
        writeln!(out, "    {line}")?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Write the secret for a "give up" request
///
/// # Errors
/// Returns any error from the writer.
pub fn write_reveal<W: Write>(out: &mut W, secret: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("The secret word was: {secret}").bright_yellow().bold()
    )
}

/// Print a one-off evaluation for the `score` command
pub fn print_score(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(guess, feedback.marks()));
    println!("  {}  ({feedback})", feedback.to_emoji());
    println!(
        "\n  Exact: {}  Present: {}",
        feedback.count_exact().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}
