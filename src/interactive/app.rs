//! TUI application state and logic

use crate::core::{Letter, Word};
use crate::game::{GameConfig, GuessRow, Outcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a> {
    pub config: GameConfig,
    pub pool: &'a [Word],
    pub session: Session,
    pub row: GuessRow,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Filling the active row
    Typing,
    /// Won or lost; waiting for play-again answer
    GameOver,
    /// Secret shown on request; waiting for play-again answer
    Revealed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Per-process statistics; nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if self.guess_distribution.len() <= guesses {
            self.guess_distribution.resize(guesses + 1, 0);
        }
        self.guess_distribution[guesses] += 1;
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GameConfig, pool: &'a [Word], mut rng: StdRng) -> Result<Self> {
        let session = config.start(pool, &mut rng)?;
        let row = session.blank_row();

        let mut app = Self {
            config,
            pool,
            session,
            row,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
            rng,
        };
        app.add_message(
            "Type letters (A-Z). Backspace to edit. Enter when the row is full.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Route one key press to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Typing => match key.code {
                KeyCode::Char('r') if ctrl => self.reveal_secret(),
                KeyCode::Char(c) if !ctrl => self.type_letter(c),
                KeyCode::Backspace => {
                    self.row.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver | InputMode::Revealed => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('n' | 'N') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn type_letter(&mut self, c: char) {
        // Non-letters are ignored
        if let Some(letter) = Letter::new(c)
            && !self.row.push(letter)
        {
            self.add_message("Row is full - press Enter to submit", MessageStyle::Info);
        }
    }

    /// Submit the active row to the session
    pub fn submit(&mut self) {
        match self.session.submit_row(&self.row) {
            Ok(outcome) => {
                self.row = self.session.blank_row();
                match outcome {
                    Outcome::Continue { .. } => {
                        let left = self.session.remaining_guesses();
                        self.add_message(
                            &format!(
                                "{left} {} left",
                                if left == 1 { "guess" } else { "guesses" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                    Outcome::Win { .. } => {
                        let guesses = self.session.current_row_index();
                        self.stats.record_win(guesses);
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!(
                                "You win! You guessed {} in {guesses}",
                                self.session.reveal_secret()
                            ),
                            MessageStyle::Success,
                        );
                        self.add_message("Play again? (y/n)", MessageStyle::Info);
                    }
                    Outcome::Loss { secret, .. } => {
                        self.stats.record_loss();
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("No guesses left. The word was: {secret}"),
                            MessageStyle::Error,
                        );
                        self.add_message("Play again? (y/n)", MessageStyle::Info);
                    }
                }
            }
            Err(err) => {
                debug!(error = %err, "submission rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Show the secret without ending the game
    pub fn reveal_secret(&mut self) {
        let secret = self.session.reveal_secret().clone();
        info!(secret = %secret, "secret revealed on request");
        self.input_mode = InputMode::Revealed;
        self.add_message(
            &format!("The secret word was: {secret}"),
            MessageStyle::Info,
        );
        self.add_message("Play again? (y/n)", MessageStyle::Info);
    }

    /// Replace the session with a fresh one
    pub fn new_game(&mut self) {
        match self.config.start(self.pool, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.row = self.session.blank_row();
                self.input_mode = InputMode::Typing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("starting TUI");
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
