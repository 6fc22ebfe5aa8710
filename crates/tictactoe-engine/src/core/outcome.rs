use serde::{Deserialize, Serialize};

use super::{
    board::Board,
    mark::{Cell, Mark},
    position::Line,
};

/// Result of scanning a board for a terminal condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    #[default]
    Unset,
    /// `mark` occupies all three cells of `line`.
    Win { mark: Mark, line: Line },
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns `true` for `Win` and `Draw`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Unset)
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Unset | Outcome::Draw => None,
        }
    }

    #[must_use]
    pub const fn winning_line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::Unset | Outcome::Draw => None,
        }
    }
}

/// Scans `board` for a completed line, then for a draw.
///
/// Lines are checked in [`Line::ALL`] order and the first completed one is
/// reported, even when several are complete at once.
#[must_use]
pub fn detect_outcome(board: &Board) -> Outcome {
    let completed = Line::ALL.iter().find_map(|line| {
        let [a, b, c] = line.positions().map(|pos| board.cell(pos));
        match a {
            Cell::Occupied(mark) if a == b && a == c => Some((mark, *line)),
            _ => None,
        }
    });

    match completed {
        Some((mark, line)) => Outcome::Win { mark, line },
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Unset,
    }
}

impl Board {
    /// See [`detect_outcome`].
    #[must_use]
    pub fn detect_outcome(&self) -> Outcome {
        detect_outcome(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Position;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn line(cells: [(usize, usize); 3]) -> Line {
        let positions = cells.map(|(r, c)| Position::new(r, c).unwrap());
        *Line::ALL
            .iter()
            .find(|line| *line.positions() == positions)
            .unwrap()
    }

    #[test]
    fn test_empty_board_is_unset() {
        assert_eq!(detect_outcome(&Board::EMPTY), Outcome::Unset);
    }

    #[test]
    fn test_partial_board_is_unset() {
        assert_eq!(detect_outcome(&board("XO./.X./..O")), Outcome::Unset);
    }

    #[test]
    fn test_row_win() {
        assert_eq!(
            detect_outcome(&board("OO./XXX/...")),
            Outcome::Win {
                mark: Mark::X,
                line: line([(1, 0), (1, 1), (1, 2)])
            }
        );
    }

    #[test]
    fn test_column_win() {
        assert_eq!(
            detect_outcome(&board("XO./XO./.OX")),
            Outcome::Win {
                mark: Mark::O,
                line: line([(0, 1), (1, 1), (2, 1)])
            }
        );
    }

    #[test]
    fn test_diagonal_wins() {
        assert_eq!(
            detect_outcome(&board("XO./OX./..X")),
            Outcome::Win {
                mark: Mark::X,
                line: line([(0, 0), (1, 1), (2, 2)])
            }
        );
        assert_eq!(
            detect_outcome(&board("XXO/XO./O..")),
            Outcome::Win {
                mark: Mark::O,
                line: line([(0, 2), (1, 1), (2, 0)])
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(detect_outcome(&board("XOX/XOO/OXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let outcome = detect_outcome(&board("XOX/OXO/OXX"));
        assert_eq!(outcome.winner(), Some(Mark::X));
    }

    #[test]
    fn test_multiple_lines_report_first_in_scan_order() {
        // Contrived: top row and left column both complete for X.
        let outcome = detect_outcome(&board("XXX/XOO/XOO"));
        assert_eq!(
            outcome,
            Outcome::Win {
                mark: Mark::X,
                line: line([(0, 0), (0, 1), (0, 2)])
            }
        );

        // Contrived: both marks complete a row; the upper row wins the scan.
        let outcome = detect_outcome(&board("OOO/.../XXX"));
        assert_eq!(outcome.winner(), Some(Mark::O));
    }

    #[test]
    fn test_detect_outcome_is_deterministic() {
        for s in [".../.../...", "XXX/XOO/XOO", "XOX/XOO/OXX", "XO./.X./..O"] {
            let b = board(s);
            assert_eq!(detect_outcome(&b), detect_outcome(&b));
            assert_eq!(b.detect_outcome(), detect_outcome(&b));
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let win = detect_outcome(&board("XXX/OO./..."));
        assert!(win.is_terminal());
        assert!(win.is_win());
        assert_eq!(win.winning_line(), Some(&line([(0, 0), (0, 1), (0, 2)])));

        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Draw.winning_line(), None);
        assert!(!Outcome::Unset.is_terminal());
    }

    #[test]
    fn test_outcome_json_shape() {
        let win = detect_outcome(&board("XXX/OO./..."));
        let json = serde_json::to_value(win).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Win": {
                    "mark": "X",
                    "line": [{"row": 0, "col": 0}, {"row": 0, "col": 1}, {"row": 0, "col": 2}]
                }
            })
        );
    }
}
