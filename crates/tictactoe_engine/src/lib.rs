//! Tic-tac-toe engine with a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells in row-major order, no behaviour beyond storage
//! - **Rules**: win, fullness and status checks over a board
//! - **Search**: exhaustive minimax scoring a position for the computer
//! - **Selector**: picks and plays the computer's best move
//! - **Game**: one game between a human and the computer
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new(Mark::X);
//! game.apply_human_move(1, 1)?;
//! let reply = game.apply_computer_move();
//! assert!(reply.is_some());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
pub mod selector;
mod types;

pub use action::{InvalidMove, Move};
pub use game::Game;
pub use position::Position;
pub use rules::status;
pub use search::{Roles, Score, Search, Turn, minimax};
pub use selector::{best_move, choose_move, evaluate_moves};
pub use types::{Board, Cell, GameStatus, Mark, ParseBoardError};
