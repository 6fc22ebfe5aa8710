use std::fmt;

use serde::Serialize;
use tictactoe_engine::{Board, Mark, NoLegalMoveError, Position};

/// Rule that selected a suggested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Reason {
    #[display("completes a line")]
    WinNow,
    #[display("blocks the opponent's line")]
    Block,
    #[display("takes the center")]
    Center,
    #[display("takes a corner")]
    Corner,
    #[display("first available cell")]
    FirstAvailable,
}

/// A cell chosen by a [`MoveAdvisor`], with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    position: Position,
    reason: Reason,
}

impl Suggestion {
    #[must_use]
    pub const fn new(position: Position, reason: Reason) -> Self {
        Self { position, reason }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }
}

/// Chooses a move for `mark` on a board snapshot.
///
/// Implementations must be pure: the same board and mark give the same
/// suggestion, and the board is never modified.
pub trait MoveAdvisor: fmt::Debug {
    /// Suggests a cell for `mark`.
    ///
    /// Fails with [`NoLegalMoveError`] when the board has no empty cell.
    fn suggest(&self, board: &Board, mark: Mark) -> Result<Suggestion, NoLegalMoveError>;
}
