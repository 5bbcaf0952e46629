//! Simple interactive CLI mode
//!
//! Line-based game without TUI. Each line is a guess or a command. Commands
//! start with `/` (or are a lone `?`) so they never collide with guesses.

use crate::game::{GuessRow, Session, SessionError};
use crate::output::{write_outcome, write_reveal, write_row};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode
///
/// `new_session` is called for the first game and every restart.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// session cannot be created.
pub fn run_simple<R, W, F>(input: R, out: &mut W, mut new_session: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> Result<Session>,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordly                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type a guess and press Enter.")?;
    writeln!(out, "Commands: '?' to reveal the secret, '/new' for a new game, '/quit' to exit\n")?;

    let mut lines = input.lines();
    let mut session = new_session()?;
    write_intro(out, &session)?;

    loop {
        write!(
            out,
            "Guess {}/{}: ",
            session.current_row_index() + 1,
            session.max_guesses()
        )?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;
        let text = line.trim();

        match text.to_lowercase().as_str() {
            "" => {}
            "/quit" | "/exit" => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            "/new" => {
                session = new_session()?;
                writeln!(out, "\nNew game started!")?;
                write_intro(out, &session)?;
            }
            "?" | "/reveal" => {
                write_reveal(out, session.reveal_secret())?;
                if !play_again(&mut lines, out)? {
                    return Ok(());
                }
                session = new_session()?;
                write_intro(out, &session)?;
            }
            _ => {
                let length = session.word_length();
                if text.chars().count() > length {
                    writeln!(out, "Guess must be exactly {length} letters.")?;
                    continue;
                }

                let row = GuessRow::from_text(text, length);
                match session.submit_row(&row) {
                    Ok(outcome) => {
                        if let Some(guess) = row.to_word() {
                            write_row(out, &guess, outcome.feedback(), &session)?;
                        }
                        write_outcome(out, &outcome, &session)?;

                        if outcome.is_terminal() {
                            if !play_again(&mut lines, out)? {
                                return Ok(());
                            }
                            session = new_session()?;
                            write_intro(out, &session)?;
                        }
                    }
                    Err(
                        err @ (SessionError::IncompleteRow { .. }
                        | SessionError::SessionTerminated(_)),
                    ) => {
                        debug!(error = %err, "submission rejected");
                        writeln!(out, "{err}")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }
}

fn write_intro<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    writeln!(
        out,
        "Wordly - {} letters, {} guesses\n",
        session.word_length(),
        session.max_guesses()
    )?;
    Ok(())
}

/// Ask whether to start another game; end of input counts as "no"
fn play_again<I, W>(lines: &mut I, out: &mut W) -> Result<bool>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    write!(out, "Play again? (yes/no): ")?;
    out.flush()?;

    let answer = match lines.next() {
        Some(line) => line?.trim().to_lowercase(),
        None => String::new(),
    };

    if matches!(answer.as_str(), "yes" | "y") {
        writeln!(out, "\nNew game started!")?;
        Ok(true)
    } else {
        writeln!(out, "\nThanks for playing!\n")?;
        Ok(false)
    }
}
