//! Driving the computer side of a live game.
//!
//! [`ComputerPlayer`] connects a [`MoveAdvisor`] to a [`GameSession`]: when the
//! session reports that the computer is to move, it asks the advisor for a
//! cell, stamps it with the current generation, and hands it to the session,
//! which applies it once the pacing delay has elapsed.
//!
//! ```
//! use std::time::Duration;
//!
//! use tictactoe_advisor::ComputerPlayer;
//! use tictactoe_engine::{GameMode, GameSession, Position, Status};
//!
//! let player = ComputerPlayer::heuristic();
//! let mut session = GameSession::new(GameMode::PlayerVsComputer, 10, Duration::from_millis(300));
//! session.select_cell(Position::CENTER).unwrap();
//!
//! while session.status() == Status::AwaitingComputer {
//!     player.drive(&mut session);
//! }
//! assert_eq!(session.state().board().move_count(), 2);
//! ```

use tictactoe_engine::{GameSession, GameState, NoLegalMoveError, ScheduledMove, TransitionError};

use crate::{HeuristicAdvisor, MoveAdvisor};

#[derive(Debug)]
pub struct ComputerPlayer<'a> {
    advisor: Box<dyn MoveAdvisor + 'a>,
}

impl ComputerPlayer<'static> {
    /// Computer player backed by [`HeuristicAdvisor`].
    #[must_use]
    pub fn heuristic() -> Self {
        Self::new(Box::new(HeuristicAdvisor))
    }
}

impl<'a> ComputerPlayer<'a> {
    #[must_use]
    pub fn new(advisor: Box<dyn MoveAdvisor + 'a>) -> Self {
        Self { advisor }
    }

    /// Plans a move for the side to move in `state`.
    ///
    /// Fails when the game is already over or the board is full.
    pub fn plan_move(&self, state: &GameState) -> Result<ScheduledMove, NoLegalMoveError> {
        if state.outcome().is_terminal() {
            return Err(NoLegalMoveError);
        }
        let suggestion = self.advisor.suggest(state.board(), state.turn())?;
        Ok(state.schedule_move(suggestion.position()))
    }

    /// Runs one frame of `session` on behalf of the computer.
    ///
    /// Plans and schedules a move if the computer is to move and nothing live
    /// is pending, then advances the session. Returns what
    /// [`GameSession::increment_frame`] returns.
    ///
    /// If the advisor cannot produce a move, the frame is not advanced and
    /// [`TransitionError::NoLegalMove`] is returned. The session keeps waiting
    /// for the computer, so the error repeats on every call.
    pub fn drive(&self, session: &mut GameSession) -> Option<Result<(), TransitionError>> {
        if session.needs_computer_move() {
            match self.plan_move(session.state()) {
                Ok(scheduled) => session.schedule_computer_move(scheduled),
                Err(err) => {
                    tracing::error!(%err, board = %session.state().board(), "computer cannot move");
                    return Some(Err(err.into()));
                }
            }
        }
        session.increment_frame()
    }
}
