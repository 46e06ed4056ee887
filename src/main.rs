//! Rottawordle - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rottawordle::{
    commands::{replay, run_simple},
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SECRET, GameConfig},
    core::DEFAULT_LETTERS,
    game::share_text,
    interactive::{App, run_tui},
    output::{print_board, print_outcome},
    telemetry,
};

#[derive(Parser)]
#[command(
    name = "rottawordle",
    about = "Guess the hidden word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The word to guess
    #[arg(long, global = true, env = "ROTTAWORDLE_SECRET", default_value = DEFAULT_SECRET)]
    secret: String,

    /// Number of guesses allowed per round
    #[arg(short = 'n', long, global = true, env = "ROTTAWORDLE_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Letters accepted as input
    #[arg(long, global = true, env = "ROTTAWORDLE_ALPHABET", default_value = DEFAULT_LETTERS)]
    alphabet: String,

    /// Log game events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type guesses line by line)
    Simple,

    /// Play a list of guesses and print the result
    Replay {
        /// Guesses in the order they are played
        guesses: Vec<String>,

        /// Also print the share text for an unfinished round
        #[arg(short, long)]
        share: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = GameConfig::new(&cli.secret, cli.max_attempts, &cli.alphabet)
        .context("invalid game configuration")?;
    tracing::debug!(
        length = config.word_length(),
        max_attempts = config.max_attempts(),
        "configuration loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(config)),
        Commands::Simple => run_simple(&config).context("simple mode failed"),
        Commands::Replay { guesses, share } => run_replay_command(&config, &guesses, share),
    }
}

fn run_replay_command(config: &GameConfig, guesses: &[String], share: bool) -> Result<()> {
    let session = replay(config, guesses)?;

    print_board(&session);
    print_outcome(&session);

    // Finished rounds already end with the share text
    if share && !session.outcome().is_over() {
        println!("\n{}\n", share_text(&session));
    }
    Ok(())
}
