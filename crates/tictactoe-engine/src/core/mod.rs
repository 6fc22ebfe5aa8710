//! Board-level data structures and rules.
//!
//! - [`Mark`] / [`Cell`] - What a player places and what a cell holds
//! - [`Position`] / [`Line`] - Cell coordinates and the eight winning triples
//! - [`Board`] - Immutable 3×3 grid with move application
//! - [`Outcome`] - Win/draw detection result

pub use self::{board::*, mark::*, outcome::*, position::*};

pub(crate) mod board;
pub(crate) mod mark;
pub(crate) mod outcome;
pub(crate) mod position;
