use serde::{Deserialize, Serialize};

use crate::{
    IllegalMoveError, StaleMoveError, TransitionError,
    core::{Board, Mark, Outcome, Position},
};

use super::{ScheduledMove, Status};

/// Who controls each mark.
///
/// In [`GameMode::PlayerVsComputer`] X is the human and O the computer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameMode {
    #[default]
    #[display("player vs player")]
    PlayerVsPlayer,
    #[display("player vs computer")]
    PlayerVsComputer,
}

impl GameMode {
    /// Mark played by the computer, if any.
    #[must_use]
    pub const fn computer_mark(self) -> Option<Mark> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer => Some(Mark::O),
        }
    }

    #[must_use]
    pub const fn is_computer(self, mark: Mark) -> bool {
        matches!(
            (self.computer_mark(), mark),
            (Some(Mark::X), Mark::X) | (Some(Mark::O), Mark::O)
        )
    }
}

/// Input accepted by [`GameState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A human selected a cell for the side to move.
    SelectCell { row: usize, col: usize },
    /// The game mode was changed. Board, turn and outcome are kept.
    SelectMode(GameMode),
    /// Start over with an empty board, X to move. The mode is kept.
    Restart,
    /// A computer move whose delay has elapsed.
    ComputerMove(ScheduledMove),
}

/// Immutable snapshot of a game.
///
/// Every successful [`transition`](Self::transition) returns a new snapshot
/// with its generation advanced; failed transitions leave the caller's
/// snapshot as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    mode: GameMode,
    outcome: Outcome,
    generation: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameState {
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            board: Board::EMPTY,
            turn: Mark::X,
            mode,
            outcome: Outcome::Unset,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub const fn turn(&self) -> Mark {
        self.turn
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        Status::derive(&self.outcome, self.mode, self.turn)
    }

    /// Checks whether a human may play `(row, col)` now.
    ///
    /// Rejected when the game is over, when the computer is to move, when the
    /// coordinates are off the board, or when the cell is occupied.
    pub fn check_human_move(&self, row: usize, col: usize) -> Result<Position, IllegalMoveError> {
        if self.outcome.is_terminal() {
            return Err(IllegalMoveError::GameOver);
        }
        if self.mode.is_computer(self.turn) {
            return Err(IllegalMoveError::ComputerTurn);
        }
        let pos = Position::new(row, col).ok_or(IllegalMoveError::OutOfRange { row, col })?;
        if !self.board.cell(pos).is_empty() {
            return Err(IllegalMoveError::Occupied { row, col });
        }
        Ok(pos)
    }

    #[must_use]
    pub fn is_move_legal(&self, row: usize, col: usize) -> bool {
        self.check_human_move(row, col).is_ok()
    }

    /// Stamps a computer move at `position` with the current generation.
    #[must_use]
    pub const fn schedule_move(&self, position: Position) -> ScheduledMove {
        ScheduledMove::new(self.generation, self.turn, position)
    }

    /// Applies `event` and returns the resulting snapshot.
    pub fn transition(&self, event: GameEvent) -> Result<Self, TransitionError> {
        let next = match event {
            GameEvent::SelectCell { row, col } => {
                let pos = self.check_human_move(row, col)?;
                self.place(pos)?
            }
            GameEvent::SelectMode(mode) if mode == self.mode => return Ok(*self),
            GameEvent::SelectMode(mode) => Self {
                mode,
                generation: self.generation + 1,
                ..*self
            },
            GameEvent::Restart => Self {
                generation: self.generation + 1,
                ..Self::new(self.mode)
            },
            GameEvent::ComputerMove(scheduled) => {
                self.check_computer_move(&scheduled)?;
                self.place(scheduled.position())?
            }
        };
        tracing::debug!(
            ?event,
            generation = next.generation,
            board = %next.board,
            outcome = ?next.outcome,
            "game state transition"
        );
        Ok(next)
    }

    fn check_computer_move(&self, scheduled: &ScheduledMove) -> Result<(), TransitionError> {
        if scheduled.generation() != self.generation {
            return Err(StaleMoveError {
                planned: scheduled.generation(),
                current: self.generation,
            }
            .into());
        }
        if self.outcome.is_terminal() {
            return Err(IllegalMoveError::GameOver.into());
        }
        if !self.mode.is_computer(self.turn) || scheduled.mark() != self.turn {
            return Err(IllegalMoveError::NotComputerTurn.into());
        }
        Ok(())
    }

    fn place(&self, pos: Position) -> Result<Self, IllegalMoveError> {
        let board = self.board.apply_move(pos.row(), pos.col(), self.turn)?;
        Ok(Self {
            board,
            turn: self.turn.opponent(),
            mode: self.mode,
            outcome: board.detect_outcome(),
            generation: self.generation + 1,
        })
    }
}
