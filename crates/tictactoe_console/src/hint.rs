//! Position analysis for the `hint` command.

use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{Board, GameStatus, Mark, Roles, choose_move, evaluate_moves, status};
use tracing::instrument;

/// Prints the minimax score of every legal move for `computer`, followed
/// by the move the computer would play.
#[instrument(skip(out, board))]
pub fn write_hint<W: Write>(out: &mut W, board: &Board, computer: Mark) -> Result<()> {
    write!(out, "{}", board)?;

    match status(board) {
        GameStatus::Won(mark) => {
            writeln!(out, "Game over: {} wins", mark)?;
            return Ok(());
        }
        GameStatus::Draw => {
            writeln!(out, "Game over: draw")?;
            return Ok(());
        }
        GameStatus::InProgress => {}
    }

    let roles = Roles::new(computer);
    let mut scratch = board.clone();
    writeln!(out, "Scores for {}:", computer)?;
    for (pos, score) in evaluate_moves(&mut scratch, roles) {
        writeln!(out, "  {}: {} ({:+})", pos, score, score.value())?;
    }

    if let Some((pos, score)) = choose_move(&mut scratch, roles) {
        writeln!(out, "Best move: {} ({})", pos, score)?;
    }
    Ok(())
}
