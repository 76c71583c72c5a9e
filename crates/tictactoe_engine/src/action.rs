//! Moves and move errors.

use super::{Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Produced either by the computer's move selection or from human input,
/// and applied to the board immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Zero-based row of the move.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Zero-based column of the move.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// A human move the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Row or column outside 0..=2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}
