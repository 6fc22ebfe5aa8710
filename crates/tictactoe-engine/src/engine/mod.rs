//! Game state and session management.
//!
//! This module builds the playable game on top of the core board rules:
//!
//! - [`GameState`] - Immutable snapshot (board, turn, mode, outcome, generation)
//!   with the transition function [`GameState::transition`]
//! - [`GameEvent`] - Inputs accepted by the transition function
//! - [`Status`] - What the front-end should tell the players
//! - [`ScheduledMove`] - Computer move stamped with the generation it was planned against
//! - [`GameSession`] - Frame-driven owner of the live state and the pending computer move
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] for a [`GameMode`]
//! 2. Forward cell selections, mode selections and restarts as [`GameEvent`]s
//! 3. When [`GameSession::needs_computer_move`] is true, schedule a move
//! 4. Call [`GameSession::increment_frame`] on every tick; the scheduled move
//!    is applied once its delay elapses, unless the game moved on meanwhile
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEvent, GameMode, GameState, Outcome, Status};
//!
//! let mut state = GameState::new(GameMode::PlayerVsPlayer);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     state = state.transition(GameEvent::SelectCell { row, col }).unwrap();
//! }
//!
//! assert!(matches!(state.outcome(), Outcome::Win { .. }));
//! assert_eq!(state.status(), Status::Win(tictactoe_engine::Mark::X));
//! ```

pub use self::{game_session::*, game_state::*, scheduled_move::*, status::*};

mod game_session;
mod game_state;
mod scheduled_move;
mod status;
