//! Command-line interface for cascade.

use cascade_core::{Difficulty, Starter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cascade - tic-tac-toe against a rule-cascade opponent
#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(about = "Play tic-tac-toe against a rule-cascade opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Difficulty tier (easy, medium, hard); prompted for when absent
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Who opens the first match (agent or opponent)
        #[arg(short, long)]
        first: Option<Starter>,

        /// Seed for reproducible bot moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file (defaults to cascade.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Decide one move for a board given as JSON and print the result
    Decide {
        /// Board snapshot as JSON, or @path to read it from a file
        #[arg(short, long)]
        board: String,

        /// Round being played, counted from 1
        #[arg(short, long)]
        round: u8,

        /// Who opened the match (agent or opponent)
        #[arg(short, long, default_value = "agent")]
        starter: Starter,

        /// Difficulty tier (easy, medium, hard)
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for the random tier
        #[arg(long)]
        seed: Option<u64>,
    },
}
