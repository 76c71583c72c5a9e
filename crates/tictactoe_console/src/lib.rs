//! Console front end for the tic-tac-toe engine.
//!
//! - **Cli**: `play` and `hint` subcommands
//! - **Config**: TOML settings for the interactive game
//! - **Console**: the prompt-driven game loop, generic over its I/O
//! - **Hint**: per-move scores for a given position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod hint;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig, FirstPlayer};
pub use console::{Console, parse_mark_choice, parse_move};
pub use hint::write_hint;
