use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::IllegalMoveError;

use super::{
    BOARD_SIZE,
    mark::{Cell, Mark},
    position::Position,
};

/// Immutable 3×3 tic-tac-toe grid.
///
/// `Board` is `Copy` and every operation that places a mark returns a new
/// board, so hypothetical moves can be simulated without touching the live
/// game.
///
/// Boards built by legal play satisfy `count(X) - count(O) ∈ {0, 1}`.
/// The [`FromStr`] notation does not check this, which allows contrived
/// positions in analysis and tests.
///
/// # Notation
///
/// `Display` and `FromStr` use one character per cell in row-major order:
/// `X`, `O`, and `.` for empty (`_` and `-` are accepted as empty too).
/// Whitespace and `/` are ignored when parsing.
///
/// ```
/// use tictactoe_engine::{Board, Mark};
///
/// let board: Board = "XO./.X./...".parse().unwrap();
/// let board = board.apply_move(2, 2, Mark::X).unwrap();
/// assert_eq!(board.to_string(), "XO./.X./..X");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
    };

    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns a new board with `mark` placed at `(row, col)`.
    ///
    /// Fails if the coordinates are off the board or the cell is occupied.
    /// The receiver is never modified.
    pub fn apply_move(&self, row: usize, col: usize, mark: Mark) -> Result<Self, IllegalMoveError> {
        let pos = Position::new(row, col).ok_or(IllegalMoveError::OutOfRange { row, col })?;
        if !self.cell(pos).is_empty() {
            return Err(IllegalMoveError::Occupied { row, col });
        }
        let mut next = *self;
        next.cells[row][col] = Cell::Occupied(mark);
        Ok(next)
    }

    /// Iterates over rows top-to-bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.cell(pos)))
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<Position, 9> {
        self.cells()
            .filter_map(|(pos, cell)| cell.is_empty().then_some(pos))
            .collect()
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(mark))
            .count()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.move_count() == Position::ALL.len()
    }

    /// Infers the side to move from the mark counts.
    ///
    /// Returns `None` when the counts cannot come from alternating play
    /// starting with X.
    #[must_use]
    pub fn inferred_turn(&self) -> Option<Mark> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        match x.checked_sub(o) {
            Some(0) => Some(Mark::X),
            Some(1) => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },
    #[display("invalid cell character {found:?} at cell {index}")]
    InvalidCell { found: char, index: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect::<Vec<_>>();
        if chars.len() != Position::ALL.len() {
            return Err(ParseBoardError::WrongLength { found: chars.len() });
        }

        let mut board = Board::EMPTY;
        for (index, (pos, c)) in Position::ALL.into_iter().zip(chars).enumerate() {
            let cell = Cell::from_char(c).ok_or(ParseBoardError::InvalidCell { found: c, index })?;
            board.cells[pos.row()][pos.col()] = cell;
        }
        Ok(board)
    }
}
