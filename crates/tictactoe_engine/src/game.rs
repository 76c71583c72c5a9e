//! A single game between a human and the computer.

use crate::search::Roles;
use crate::{Board, Cell, GameStatus, InvalidMove, Mark, Move, Position, rules, selector};
use tracing::{info, instrument, warn};

/// One game: the board plus which mark each side plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    roles: Roles,
    history: Vec<Move>,
}

impl Game {
    /// Starts an empty game; the computer takes the mark `human` did not.
    #[instrument]
    pub fn new(human: Mark) -> Self {
        let roles = Roles::for_human(human);
        info!(computer = %roles.computer(), "New game");
        Self {
            board: Board::new(),
            roles,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Which mark each side plays.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.roles.human()
    }

    /// The computer's mark.
    pub fn computer(&self) -> Mark {
        self.roles.computer()
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Won, drawn or in progress.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Places the human's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// [`InvalidMove::OutOfRange`] when either coordinate is outside 0..=2,
    /// [`InvalidMove::Occupied`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Move, InvalidMove> {
        let position = Position::from_coords(row, col).ok_or_else(|| {
            warn!("Move off the board");
            InvalidMove::OutOfRange { row, col }
        })?;

        if !self.board.is_empty(position) {
            warn!(%position, "Cell already occupied");
            return Err(InvalidMove::Occupied(position));
        }

        let mv = Move::new(self.human(), position);
        self.board.set(position, Cell::Marked(mv.mark));
        self.history.push(mv);
        info!(%mv, "Human played");
        Ok(mv)
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns `None` only when the board has no empty cell; check
    /// [`Game::status`] first.
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self) -> Option<Move> {
        let mv = selector::best_move(&mut self.board, self.roles)?;
        self.history.push(mv);
        Some(mv)
    }

    /// Clears the board for another game with the same marks.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
    }
}
