use serde::{Deserialize, Serialize};

use crate::core::{Mark, Outcome};

use super::GameMode;

/// Status classification driving the front-end's status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Status {
    Win(Mark),
    Draw,
    /// A human is expected to play `Mark`.
    AwaitingHuman(Mark),
    AwaitingComputer,
}

impl Status {
    #[must_use]
    pub const fn derive(outcome: &Outcome, mode: GameMode, turn: Mark) -> Self {
        match outcome {
            Outcome::Win { mark, .. } => Status::Win(*mark),
            Outcome::Draw => Status::Draw,
            Outcome::Unset if mode.is_computer(turn) => Status::AwaitingComputer,
            Outcome::Unset => Status::AwaitingHuman(turn),
        }
    }
}
