//! Exhaustive minimax search.
//!
//! The search explores every continuation of a position, in row-major
//! order, with no pruning and no memoization. Speculative marks are
//! placed on the caller's board and removed before each call returns,
//! so the board is unchanged once the search is done.

use crate::{Board, Cell, GameStatus, Mark, Position, rules};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use tracing::{debug, instrument};

/// Outcome of a position under optimal play, from the computer's side.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Score {
    /// The human wins.
    #[display("loss")]
    Loss = -1,
    /// Neither side wins.
    #[display("draw")]
    Draw = 0,
    /// The computer wins.
    #[display("win")]
    Win = 1,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

/// Which side the search is choosing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The computer moves and picks the highest score.
    Maximizing,
    /// The human moves and picks the lowest score.
    Minimizing,
}

impl Turn {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Turn::Maximizing => Turn::Minimizing,
            Turn::Minimizing => Turn::Maximizing,
        }
    }

    /// Starting bound for the side's best score.
    fn worst(self) -> Score {
        match self {
            Turn::Maximizing => Score::Loss,
            Turn::Minimizing => Score::Win,
        }
    }

    fn prefer(self, best: Score, candidate: Score) -> Score {
        match self {
            Turn::Maximizing => best.max(candidate),
            Turn::Minimizing => best.min(candidate),
        }
    }
}

/// Assignment of marks to the computer and the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roles {
    computer: Mark,
}

impl Roles {
    /// Roles where the computer plays `computer`.
    pub fn new(computer: Mark) -> Self {
        Self { computer }
    }

    /// Roles where the human plays `human` and the computer the other mark.
    pub fn for_human(human: Mark) -> Self {
        Self::new(human.opponent())
    }

    /// The computer's mark.
    pub fn computer(self) -> Mark {
        self.computer
    }

    /// The human's mark.
    pub fn human(self) -> Mark {
        self.computer.opponent()
    }

    /// The same board seen from the other side.
    pub fn swapped(self) -> Self {
        Self::new(self.human())
    }

    /// Mark placed by the side to move.
    pub fn mark_for(self, turn: Turn) -> Mark {
        match turn {
            Turn::Maximizing => self.computer(),
            Turn::Minimizing => self.human(),
        }
    }

    /// Score of a finished board, or `None` while play continues.
    pub fn terminal_score(self, board: &Board) -> Option<Score> {
        match rules::status(board) {
            GameStatus::Won(mark) if mark == self.computer => Some(Score::Win),
            GameStatus::Won(_) => Some(Score::Loss),
            GameStatus::Draw => Some(Score::Draw),
            GameStatus::InProgress => None,
        }
    }
}

/// A minimax searcher for one side assignment.
///
/// Counts the nodes it visits across calls; the count has no effect on
/// the scores it returns.
#[derive(Debug, Clone)]
pub struct Search {
    roles: Roles,
    nodes: u64,
}

impl Search {
    /// Creates a searcher for the given roles.
    pub fn new(roles: Roles) -> Self {
        Self { roles, nodes: 0 }
    }

    /// The roles this searcher scores for.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` with `turn` to move.
    pub fn minimax(&mut self, board: &mut Board, turn: Turn) -> Score {
        self.nodes += 1;

        if let Some(score) = self.roles.terminal_score(board) {
            return score;
        }

        let mark = Cell::Marked(self.roles.mark_for(turn));
        let mut best = turn.worst();
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, mark);
            let score = self.minimax(board, turn.opposite());
            board.set(pos, Cell::Empty);
            best = turn.prefer(best, score);
        }
        best
    }

    /// Scores the computer playing at `pos`, with the human to reply.
    ///
    /// `pos` must be empty. The board is restored before returning.
    pub fn score_move(&mut self, board: &mut Board, pos: Position) -> Score {
        debug_assert!(board.is_empty(pos), "score_move on occupied {:?}", pos);
        board.set(pos, Cell::Marked(self.roles.computer()));
        let score = self.minimax(board, Turn::Minimizing);
        board.set(pos, Cell::Empty);
        score
    }
}

/// Scores `board` under optimal play with `turn` to move.
#[instrument(level = "debug", skip(board), ret)]
pub fn minimax(board: &mut Board, roles: Roles, turn: Turn) -> Score {
    let mut search = Search::new(roles);
    let score = search.minimax(board, turn);
    debug!(nodes = search.nodes(), "Search complete");
    score
}
