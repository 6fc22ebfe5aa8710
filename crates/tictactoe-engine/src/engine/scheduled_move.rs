use serde::{Deserialize, Serialize};

use crate::core::{Mark, Position};

/// A computer move planned against a specific game-state generation.
///
/// Created by [`GameState::schedule_move`](super::GameState::schedule_move).
/// Applying it to a state with a different generation fails with
/// [`StaleMoveError`](crate::StaleMoveError), so a move planned before a
/// restart or mode switch can never land on the new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMove {
    generation: u64,
    mark: Mark,
    position: Position,
}

impl ScheduledMove {
    pub(crate) const fn new(generation: u64, mark: Mark, position: Position) -> Self {
        Self {
            generation,
            mark,
            position,
        }
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn mark(&self) -> Mark {
        self.mark
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
