//! Wordly - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordly::{
    commands::{run_simple, score_guess},
    core::Word,
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig},
    output::print_score,
    wordlists::{
        SECRETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordly",
    about = "Guess the hidden word with per-letter color feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the secret word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    letters: usize,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Force the secret word (for testing); picked randomly when omitted
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Path to a word list (one word per line); embedded list when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Evaluate one guess against a secret and exit
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the secret pool based on the -w flag
fn load_pool(wordlist: Option<&str>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to read word list {path}"))
        }
        None => Ok(words_from_slice(SECRETS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let config = GameConfig::new(cli.letters, cli.guesses, cli.secret);

    match command {
        Commands::Play => {
            init_file_logging()?;
            config.validate()?;
            let pool = load_pool(cli.wordlist.as_deref())?;
            run_play_command(config, &pool)
        }
        Commands::Simple => {
            init_stderr_logging();
            config.validate()?;
            let pool = load_pool(cli.wordlist.as_deref())?;
            run_simple_command(&config, &pool)
        }
        Commands::Score { guess, secret } => {
            init_stderr_logging();
            let result = score_guess(&guess, &secret)?;
            print_score(&result.guess, &result.secret, &result.feedback);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Log to a file so output does not interfere with the TUI
fn init_file_logging() -> Result<()> {
    let log_file = std::fs::File::create("wordly_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn run_simple_command(config: &GameConfig, pool: &[Word]) -> Result<()> {
    let mut rng = StdRng::from_os_rng();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    info!(letters = config.word_length, guesses = config.max_guesses, "starting simple mode");
    run_simple(stdin.lock(), &mut stdout, || {
        config.start(pool, &mut rng).map_err(Into::into)
    })
}

fn run_play_command(config: GameConfig, pool: &[Word]) -> Result<()> {
    use wordly::interactive::{App, run_tui};

    let app = App::new(config, pool, StdRng::from_os_rng())?;
    run_tui(app)
}
