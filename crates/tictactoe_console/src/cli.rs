//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Your mark (X or O); skips the prompt
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Let the computer open each game
        #[arg(long)]
        computer_first: bool,

        /// Exit after one game instead of offering another
        #[arg(long)]
        no_replay: bool,
    },

    /// Score every move of a position for the computer
    Hint {
        /// Board as nine cells of X, O and _ (e.g. "XX_/OO_/___")
        #[arg(short, long)]
        board: String,

        /// The computer's mark
        #[arg(short, long, default_value = "O")]
        computer: Mark,
    },
}
