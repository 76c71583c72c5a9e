//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never mutate and never look at
//! whose turn it is.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

use crate::{Board, GameStatus};

/// Classifies a board as won, drawn or still in progress.
///
/// A completed line takes precedence over a full board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
        let board: Board = "X__/_O_/___".parse().unwrap();
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X completes the bottom-right diagonal with the last free cell.
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Mark::X));
    }
}
