//! Computer opponent for tic-tac-toe.
//!
//! This crate is layered the same way the game is driven:
//!
//! 1. **Move advice** ([`move_advisor`]) - The [`MoveAdvisor`] trait picks a
//!    cell for a mark on a given board.
//! 2. **Heuristic** ([`heuristic`]) - [`HeuristicAdvisor`], a fixed-priority
//!    policy with one ply of lookahead.
//! 3. **Computer player** ([`computer_player`]) - [`ComputerPlayer`] turns
//!    advice into generation-stamped moves and feeds them to a
//!    [`GameSession`](tictactoe_engine::GameSession).
//!
//! ```text
//! ComputerPlayer (plan + schedule against the live session)
//!     ↓ uses
//! MoveAdvisor (choose a cell for a board snapshot)
//!     ↓ uses
//! Board::apply_move / detect_outcome (same rules as real play)
//! ```
//!
//! # Example
//!
//! ```
//! use tictactoe_advisor::{HeuristicAdvisor, MoveAdvisor, Reason};
//! use tictactoe_engine::{Board, Mark};
//!
//! let board: Board = "OO./XX./...".parse().unwrap();
//! let suggestion = HeuristicAdvisor.suggest(&board, Mark::O).unwrap();
//!
//! assert_eq!((suggestion.position().row(), suggestion.position().col()), (0, 2));
//! assert_eq!(suggestion.reason(), Reason::WinNow);
//! ```
//!
//! # Limitations
//!
//! The heuristic only simulates its own next move and the opponent's next
//! move. It does not search deeper, so forks set up two plies ahead go
//! unnoticed.

pub use self::{computer_player::*, heuristic::*, move_advisor::*};

pub mod computer_player;
pub mod heuristic;
pub mod move_advisor;
