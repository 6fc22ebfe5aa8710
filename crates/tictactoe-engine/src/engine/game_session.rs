use std::time::Duration;

use crate::{IllegalMoveError, TransitionError, core::Position};

use super::{GameEvent, GameMode, GameState, ScheduledMove, Status};

#[derive(Debug, Clone, Copy)]
struct PendingMove {
    scheduled: ScheduledMove,
    remaining_frames: u64,
}

/// Live game owned by a front-end.
///
/// The session holds the authoritative [`GameState`] and at most one pending
/// computer move. The computer's move is delayed for pacing: it is applied by
/// [`increment_frame`](Self::increment_frame) once `computer_delay` worth of
/// frames has passed. Because the pending move carries the generation it was
/// planned against, a restart or mode switch in the meantime turns it into a
/// no-op instead of a move on the wrong board.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    pending: Option<PendingMove>,
    delay_frames: u64,
}

fn delay_frames(delay: Duration, fps: u64) -> u64 {
    let frames = delay.as_millis() * u128::from(fps) / 1000;
    u64::try_from(frames).unwrap_or(u64::MAX)
}

impl GameSession {
    #[must_use]
    pub fn new(mode: GameMode, fps: u64, computer_delay: Duration) -> Self {
        Self {
            state: GameState::new(mode),
            pending: None,
            delay_frames: delay_frames(computer_delay, fps),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Applies `event` to the live state.
    ///
    /// On error the state is unchanged.
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), TransitionError> {
        self.state = self.state.transition(event)?;
        Ok(())
    }

    pub fn select_cell(&mut self, pos: Position) -> Result<(), TransitionError> {
        self.handle_event(GameEvent::SelectCell {
            row: pos.row(),
            col: pos.col(),
        })
    }

    pub fn select_mode(&mut self, mode: GameMode) {
        // Mode switches are accepted in any state.
        self.state = self
            .state
            .transition(GameEvent::SelectMode(mode))
            .unwrap_or(self.state);
    }

    pub fn restart(&mut self) {
        self.state = self
            .state
            .transition(GameEvent::Restart)
            .unwrap_or(self.state);
    }

    /// Returns the pending computer move if it still matches the live state.
    #[must_use]
    pub fn pending_move(&self) -> Option<&ScheduledMove> {
        self.pending
            .as_ref()
            .map(|pending| &pending.scheduled)
            .filter(|scheduled| scheduled.generation() == self.state.generation())
    }

    /// Returns `true` when the computer is to move and nothing live is pending.
    #[must_use]
    pub fn needs_computer_move(&self) -> bool {
        self.status().is_awaiting_computer() && self.pending_move().is_none()
    }

    /// Queues `scheduled` to be applied after the computer delay.
    ///
    /// Replaces any move already pending.
    pub fn schedule_computer_move(&mut self, scheduled: ScheduledMove) {
        tracing::debug!(
            position = %scheduled.position(),
            generation = scheduled.generation(),
            delay_frames = self.delay_frames,
            "computer move scheduled"
        );
        self.pending = Some(PendingMove {
            scheduled,
            remaining_frames: self.delay_frames,
        });
    }

    /// Advances the session by one frame.
    ///
    /// Returns the result of applying the pending computer move when its delay
    /// elapses on this frame, `None` otherwise. A stale move is discarded and
    /// reported as [`TransitionError::StaleMove`].
    pub fn increment_frame(&mut self) -> Option<Result<(), TransitionError>> {
        let pending = self.pending.as_mut()?;
        pending.remaining_frames = pending.remaining_frames.saturating_sub(1);
        if pending.remaining_frames > 0 {
            return None;
        }

        let scheduled = self.pending.take()?.scheduled;
        let result = self.handle_event(GameEvent::ComputerMove(scheduled));
        match &result {
            Ok(()) => {}
            Err(TransitionError::StaleMove(err)) => {
                tracing::debug!(%err, "discarded stale computer move");
            }
            Err(TransitionError::IllegalMove(
                err @ (IllegalMoveError::GameOver | IllegalMoveError::NotComputerTurn),
            )) => {
                tracing::debug!(%err, "discarded computer move");
            }
            Err(err) => tracing::warn!(%err, "computer move rejected"),
        }
        Some(result)
    }
}
