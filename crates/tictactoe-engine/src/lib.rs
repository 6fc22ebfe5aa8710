pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a move was rejected.
///
/// Rejections are local: the state the move was attempted against is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMoveError {
    #[display("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
    #[display("game is already over")]
    GameOver,
    #[display("it is the computer's turn")]
    ComputerTurn,
    #[display("it is not the computer's turn")]
    NotComputerTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no empty cell left to play")]
pub struct NoLegalMoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("move planned against generation {planned}, but the game is at generation {current}")]
pub struct StaleMoveError {
    pub planned: u64,
    pub current: u64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum TransitionError {
    #[display("illegal move: {_0}")]
    IllegalMove(IllegalMoveError),
    #[display("stale move: {_0}")]
    StaleMove(StaleMoveError),
    #[display("no move available: {_0}")]
    NoLegalMove(NoLegalMoveError),
}
