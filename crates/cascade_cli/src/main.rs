//! Cascade - play tic-tac-toe against a rule-cascade opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use cascade_cli::cli::{Cli, Command};
use cascade_cli::{
    DecideRequest, GameConfig, InputError, Prompter, Session, SessionError, decide,
};
use cascade_core::{BoardSnapshot, Bot, Difficulty, Starter};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            first,
            seed,
            config,
        } => run_play(difficulty, first, seed, config),
        Command::Decide {
            board,
            round,
            starter,
            difficulty,
            seed,
        } => run_decide(board, round, starter, difficulty, seed),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument]
fn run_play(
    difficulty: Option<Difficulty>,
    first: Option<Starter>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config =
        GameConfig::load(config_path.as_deref())?.with_overrides(difficulty, first, seed);
    info!(?config, "Starting interactive play");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), *config.max_input_attempts());

    let difficulty = match config.difficulty() {
        Some(difficulty) => *difficulty,
        None => match prompter.choose_difficulty() {
            Ok(difficulty) => difficulty,
            Err(InputError::Closed) => return Ok(()),
            Err(err) => return Err(err.into()),
        },
    };

    let bot = match config.seed() {
        Some(seed) => Bot::with_seed(difficulty, *seed),
        None => Bot::new(difficulty),
    };

    let mut session = Session::new(bot, *config.first_starter(), prompter);
    match session.run() {
        Ok(_) => {}
        Err(SessionError::Input(InputError::Closed)) => {
            info!(score = %session.scoreboard(), "Input closed, ending session");
        }
        Err(err) => return Err(err.into()),
    }

    let final_score = session.scoreboard();
    let mut prompter = session.into_prompter();
    writeln!(prompter.output(), "Final {final_score}")?;
    Ok(())
}

/// Decide one move and print it as JSON
#[instrument]
fn run_decide(
    board: String,
    round: u8,
    starter: Starter,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let json = match board.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {path}"))?,
        None => board,
    };
    let snapshot: BoardSnapshot =
        serde_json::from_str(&json).context("Board is not a valid snapshot")?;

    let report = decide(&DecideRequest::new(snapshot, round, starter, difficulty, seed))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
