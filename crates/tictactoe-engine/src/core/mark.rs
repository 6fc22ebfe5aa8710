use serde::{Deserialize, Serialize};

/// A player's symbol.
///
/// X always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    pub const ALL: [Self; 2] = [Mark::X, Mark::O];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub(crate) const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }

    pub(crate) const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' => Some(Cell::Occupied(Mark::O)),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_char_notation() {
        for cell in [Cell::Empty, Cell::Occupied(Mark::X), Cell::Occupied(Mark::O)] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('o'), Some(Cell::Occupied(Mark::O)));
        assert_eq!(Cell::from_char('?'), None);
    }
}
