//! Fixed-priority move heuristic.
//!
//! [`HeuristicAdvisor`] tries the following rules in order and returns the
//! first that applies. Rules that scan cells do so in row-major order.
//!
//! 1. [`Reason::WinNow`] - a cell that completes a line for the mover
//! 2. [`Reason::Block`] - a cell that would complete a line for the opponent
//! 3. [`Reason::Center`] - the center cell
//! 4. [`Reason::Corner`] - the first empty of (0,0), (0,2), (2,0), (2,2)
//! 5. [`Reason::FirstAvailable`] - the first empty cell
//!
//! Rules 1 and 2 place the mark with [`Board::apply_move`] and check the
//! result with [`Board::detect_outcome`], the same primitives real play uses.

use tictactoe_engine::{Board, Mark, NoLegalMoveError, Position};

use crate::{MoveAdvisor, Reason, Suggestion};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAdvisor;

impl MoveAdvisor for HeuristicAdvisor {
    fn suggest(&self, board: &Board, mark: Mark) -> Result<Suggestion, NoLegalMoveError> {
        let empty = board.empty_cells();
        let Some(&first) = empty.first() else {
            return Err(NoLegalMoveError);
        };

        let suggestion = completing_move(board, &empty, mark)
            .map(|pos| Suggestion::new(pos, Reason::WinNow))
            .or_else(|| {
                completing_move(board, &empty, mark.opponent())
                    .map(|pos| Suggestion::new(pos, Reason::Block))
            })
            .or_else(|| {
                empty
                    .contains(&Position::CENTER)
                    .then(|| Suggestion::new(Position::CENTER, Reason::Center))
            })
            .or_else(|| {
                Position::CORNERS
                    .into_iter()
                    .find(|corner| empty.contains(corner))
                    .map(|pos| Suggestion::new(pos, Reason::Corner))
            })
            .unwrap_or(Suggestion::new(first, Reason::FirstAvailable));

        tracing::debug!(
            %board,
            %mark,
            position = %suggestion.position(),
            reason = %suggestion.reason(),
            "heuristic suggestion"
        );
        Ok(suggestion)
    }
}

/// First empty cell where placing `mark` wins the game for `mark`.
fn completing_move(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty.iter().copied().find(|pos| {
        let wins = board
            .apply_move(pos.row(), pos.col(), mark)
            .is_ok_and(|next| next.detect_outcome().winner() == Some(mark));
        tracing::trace!(%pos, %mark, wins, "simulated move");
        wins
    })
}

#[cfg(test)]
mod tests {
    use tictactoe_engine::{GameEvent, GameMode, GameState, Outcome};

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn suggest(s: &str, mark: Mark) -> (usize, usize, Reason) {
        let suggestion = HeuristicAdvisor.suggest(&board(s), mark).unwrap();
        let pos = suggestion.position();
        (pos.row(), pos.col(), suggestion.reason())
    }

    #[test]
    fn test_win_beats_block() {
        assert_eq!(suggest("OO./XX./...", Mark::O), (0, 2, Reason::WinNow));
    }

    #[test]
    fn test_block_opponent_line() {
        assert_eq!(suggest("XX./.O./...", Mark::O), (0, 2, Reason::Block));
    }

    #[test]
    fn test_center_on_empty_board() {
        assert_eq!(suggest(".../.../...", Mark::O), (1, 1, Reason::Center));
        assert_eq!(suggest(".../.../...", Mark::X), (1, 1, Reason::Center));
    }

    #[test]
    fn test_corner_when_center_taken() {
        assert_eq!(suggest(".../.X./...", Mark::O), (0, 0, Reason::Corner));
        assert_eq!(suggest("X../.O./...", Mark::X), (0, 2, Reason::Corner));
    }

    #[test]
    fn test_block_scans_row_major() {
        // X threatens (1,0) via the left column and (2,1) via the bottom row.
        assert_eq!(suggest("X.O/.O./X.X", Mark::O), (1, 0, Reason::Block));
        assert_eq!(suggest("XOX/.O./...", Mark::X), (2, 1, Reason::Block));
    }

    #[test]
    fn test_corner_order() {
        // center and the top corners taken, no line can be completed
        assert_eq!(suggest("OXO/.X./.O.", Mark::X), (2, 0, Reason::Corner));
    }

    #[test]
    fn test_first_available_when_only_edges_left() {
        assert_eq!(
            suggest("X.O/OXX/X.O", Mark::O),
            (0, 1, Reason::FirstAvailable)
        );
    }

    #[test]
    fn test_win_scans_row_major() {
        // O wins at (0,2) via the top row and at (2,0) via the left column.
        assert_eq!(suggest("OO./O.X/.XX", Mark::O), (0, 2, Reason::WinNow));
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        assert_eq!(
            HeuristicAdvisor.suggest(&board("XOX/XOO/OXX"), Mark::O),
            Err(NoLegalMoveError)
        );
    }

    #[test]
    fn test_suggest_does_not_mutate_board() {
        let b = board("XX./.O./...");
        let before = b;
        let _ = HeuristicAdvisor.suggest(&b, Mark::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_one_ply_lookahead_misses_fork() {
        // X sets up a double threat that the heuristic cannot foresee.
        let mut state = GameState::new(GameMode::PlayerVsComputer);
        for (row, col) in [(0, 0), (2, 2), (2, 0), (2, 1)] {
            state = state.transition(GameEvent::SelectCell { row, col }).unwrap();
            if state.outcome().is_terminal() {
                break;
            }
            let suggestion = HeuristicAdvisor.suggest(state.board(), Mark::O).unwrap();
            state = state
                .transition(GameEvent::ComputerMove(
                    state.schedule_move(suggestion.position()),
                ))
                .unwrap();
        }
        assert_eq!(state.board().to_string(), "X.O/OO./XXX");
        assert_eq!(state.outcome().winner(), Some(Mark::X));
    }

    /// Plays every X strategy against the heuristic as O.
    fn explore(state: GameState, stats: &mut [usize; 3]) {
        match state.outcome() {
            Outcome::Win { mark: Mark::X, .. } => stats[0] += 1,
            Outcome::Win { mark: Mark::O, .. } => stats[1] += 1,
            Outcome::Draw => stats[2] += 1,
            Outcome::Unset if state.turn() == Mark::X => {
                for pos in state.board().empty_cells() {
                    let event = GameEvent::SelectCell {
                        row: pos.row(),
                        col: pos.col(),
                    };
                    explore(state.transition(event).unwrap(), stats);
                }
            }
            Outcome::Unset => {
                let board = *state.board();
                let suggestion = HeuristicAdvisor.suggest(&board, Mark::O).unwrap();
                let could_win = board.empty_cells().iter().any(|pos| {
                    board
                        .apply_move(pos.row(), pos.col(), Mark::O)
                        .is_ok_and(|b| b.detect_outcome().winner() == Some(Mark::O))
                });
                let next = state
                    .transition(GameEvent::ComputerMove(
                        state.schedule_move(suggestion.position()),
                    ))
                    .unwrap();
                if could_win {
                    assert_eq!(next.outcome().winner(), Some(Mark::O), "missed win on {board}");
                }
                explore(next, stats);
            }
        }
    }

    #[test]
    fn test_heuristic_against_every_opponent() {
        let mut stats = [0; 3];
        explore(GameState::new(GameMode::PlayerVsComputer), &mut stats);
        let [x_wins, o_wins, draws] = stats;
        assert!(x_wins > 0, "one-ply heuristic is not unbeatable");
        assert!(o_wins > 0);
        assert!(draws > 0);
    }
}
