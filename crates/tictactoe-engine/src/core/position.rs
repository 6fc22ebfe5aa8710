use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Coordinates of a cell, `row` and `col` both in `0..3`.
///
/// A `Position` is always in range; raw coordinates coming from the outside go
/// through [`Position::new`], which rejects anything off the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All cells in row-major order.
    pub const ALL: [Self; 9] = [
        Self::at(0, 0),
        Self::at(0, 1),
        Self::at(0, 2),
        Self::at(1, 0),
        Self::at(1, 1),
        Self::at(1, 2),
        Self::at(2, 0),
        Self::at(2, 1),
        Self::at(2, 2),
    ];

    pub const CENTER: Self = Self::at(1, 1);

    /// Corner cells in the order the advisor prefers them.
    pub const CORNERS: [Self; 4] = [Self::at(0, 0), Self::at(0, 2), Self::at(2, 0), Self::at(2, 2)];

    const fn at(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// Returns the position at `(row, col)`, or `None` if it is off the board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Returns the position with the given row-major index (`0..9`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (`0..9`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }
}

/// One of the eight triples of cells that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line([Position; 3]);

impl Line {
    /// Every line in scan order: rows top-to-bottom, columns left-to-right,
    /// main diagonal, anti-diagonal.
    ///
    /// Win detection reports the first completed line in this order.
    pub const ALL: [Self; 8] = [
        Self::new(Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)),
        Self::new(Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)),
        Self::new(Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)),
        Self::new(Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)),
        Self::new(Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)),
        Self::new(Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)),
        Self::new(Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)),
        Self::new(Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)),
    ];

    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    #[must_use]
    pub const fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}
