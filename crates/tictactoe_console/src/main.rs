//! Tic-tac-toe console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::Path;
use tictactoe_console::{Cli, Command, Console, ConsoleConfig, FirstPlayer, write_hint};
use tictactoe_engine::{Board, Mark};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    match cli.command {
        Command::Play {
            config,
            mark,
            computer_first,
            no_replay,
        } => run_play(&config, mark, computer_first, no_replay),
        Command::Hint { board, computer } => run_hint(&board, computer),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    mark: Option<Mark>,
    computer_first: bool,
    no_replay: bool,
) -> Result<()> {
    let mut config = ConsoleConfig::load(config_path)?;

    if let Some(mark) = mark {
        info!(%mark, "Overriding human mark");
        config = config.with_human_mark(mark);
    }
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }
    if no_replay {
        config = config.with_replay(false);
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout(), config);
    console.run()
}

/// Print move scores for a board given on the command line
#[instrument]
fn run_hint(board: &str, computer: Mark) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    write_hint(&mut io::stdout().lock(), &board, computer)
}

fn initialize_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,tictactoe_console=debug,tictactoe_engine=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
