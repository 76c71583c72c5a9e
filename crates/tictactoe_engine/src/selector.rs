//! Choosing the computer's move.

use crate::search::{Roles, Score, Search};
use crate::{Board, Cell, Move, Position};
use tracing::{debug, info, instrument};

/// Scores every legal computer move, in row-major order.
#[instrument(skip(board))]
pub fn evaluate_moves(board: &mut Board, roles: Roles) -> Vec<(Position, Score)> {
    let mut search = Search::new(roles);
    let scored: Vec<_> = Position::valid_moves(board)
        .into_iter()
        .map(|pos| (pos, search.score_move(board, pos)))
        .collect();
    debug!(nodes = search.nodes(), "Evaluated all moves");
    scored
}

/// Picks the computer's best move without playing it.
///
/// Cells are scanned in row-major order and a later cell replaces the
/// current choice only with a strictly higher score, so the first of
/// several equally good cells is kept. Returns `None` on a full board.
#[instrument(skip(board))]
pub fn choose_move(board: &mut Board, roles: Roles) -> Option<(Position, Score)> {
    let mut search = Search::new(roles);
    let mut best: Option<(Position, Score)> = None;

    for pos in Position::valid_moves(board) {
        let score = search.score_move(board, pos);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug!(nodes = search.nodes(), ?best, "Move selection complete");
    best
}

/// Picks the computer's best move and plays it on `board`.
///
/// Returns `None`, leaving the board untouched, when no cell is empty.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, roles: Roles) -> Option<Move> {
    let (position, score) = choose_move(board, roles)?;
    board.set(position, Cell::Marked(roles.computer()));
    let mv = Move::new(roles.computer(), position);
    info!(%mv, %score, "Computer played");
    Some(mv)
}
