use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Block as BlockWidget, Borders, Widget},
};
use tictactoe_engine::{BOARD_SIZE, Cell, GameState, Mark, Position};

use crate::ui::widgets::style;

const CELL_WIDTH: u16 = 3;
const GRID_WIDTH: u16 = 3 * CELL_WIDTH + 2;
const GRID_HEIGHT: u16 = 5;

/// Renders the 3×3 grid with marks, the cursor and the winning line.
///
/// Empty cells the side to move may select show their `1`-`9` key.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    state: &'a GameState,
    cursor: Option<Position>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            cursor: None,
        }
    }

    pub fn cursor(self, cursor: Position) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        GRID_WIDTH + 2
    }

    pub fn height(&self) -> u16 {
        GRID_HEIGHT + 2
    }

    fn cell_content(&self, pos: Position) -> (String, Style) {
        let (text, mut style) = match self.state.board().cell(pos) {
            Cell::Occupied(Mark::X) => ("X".to_owned(), style::MARK_X),
            Cell::Occupied(Mark::O) => ("O".to_owned(), style::MARK_O),
            Cell::Empty if self.state.is_move_legal(pos.row(), pos.col()) => {
                ((pos.index() + 1).to_string(), style::HINT)
            }
            Cell::Empty => (" ".to_owned(), style::HINT),
        };
        if self
            .state
            .outcome()
            .winning_line()
            .is_some_and(|line| line.contains(pos))
        {
            style = style.patch(style::WIN);
        }
        if self.cursor == Some(pos) {
            style = style.patch(style::CURSOR);
        }
        (format!(" {text} "), style)
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

#[expect(clippy::cast_possible_truncation)]
impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = BlockWidget::new().borders(Borders::ALL).border_style(style::GRID);
        let inner = block.inner(area);
        block.render(area, buf);
        let area = inner.intersection(buf.area);

        for row in 0..BOARD_SIZE {
            let y = area.y + row as u16 * 2;
            if y >= area.bottom() {
                break;
            }
            let mut x = area.x;
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    buf.set_string(x, y, "│", style::GRID);
                    x += 1;
                }
                if let Some(pos) = Position::new(row, col) {
                    let (text, style) = self.cell_content(pos);
                    buf.set_string(x, y, text, style);
                }
                x += CELL_WIDTH;
            }
            if row + 1 < BOARD_SIZE && y + 1 < area.bottom() {
                buf.set_string(area.x, y + 1, "───┼───┼───", style::GRID);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tictactoe_engine::{GameEvent, GameMode};

    use super::*;

    fn play(moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(GameMode::PlayerVsPlayer), |state, &(row, col)| {
                state
                    .transition(GameEvent::SelectCell { row, col })
                    .unwrap()
            })
    }

    fn render(display: &BoardDisplay<'_>) -> Buffer {
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_size() {
        let state = GameState::new(GameMode::PlayerVsPlayer);
        let display = BoardDisplay::new(&state);
        assert_eq!(display.width(), 13);
        assert_eq!(display.height(), 7);
    }

    #[test]
    fn test_renders_marks_and_hints() {
        let state = play(&[(0, 0), (1, 1)]);
        let buf = render(&BoardDisplay::new(&state));
        assert_eq!(row_text(&buf, 1), "│ X │ 2 │ 3 │");
        assert_eq!(row_text(&buf, 2), "│───┼───┼───│");
        assert_eq!(row_text(&buf, 3), "│ 4 │ O │ 6 │");
        assert_eq!(row_text(&buf, 5), "│ 7 │ 8 │ 9 │");
    }

    #[test]
    fn test_hides_hints_when_game_is_over() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let buf = render(&BoardDisplay::new(&state));
        assert_eq!(row_text(&buf, 1), "│ X │ X │ X │");
        assert_eq!(row_text(&buf, 3), "│ O │ O │   │");
        assert_eq!(buf[(2, 1)].bg, style::WIN.bg.unwrap());
        assert_ne!(buf[(2, 3)].bg, style::WIN.bg.unwrap());
    }

    #[test]
    fn test_highlights_cursor() {
        let state = GameState::new(GameMode::PlayerVsPlayer);
        let buf = render(&BoardDisplay::new(&state).cursor(Position::CENTER));
        let cell = &buf[(6, 3)];
        assert_eq!(cell.symbol(), "5");
        assert!(cell.modifier.contains(ratatui::style::Modifier::REVERSED));
        assert!(!buf[(2, 1)].modifier.contains(ratatui::style::Modifier::REVERSED));
    }
}
