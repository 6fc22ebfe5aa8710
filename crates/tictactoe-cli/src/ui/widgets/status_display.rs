use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::Widget,
};
use tictactoe_engine::{GameMode, GameState, Status};

use crate::ui::widgets::style;

/// Headline text for a game status.
pub fn status_text(status: Status, mode: GameMode) -> String {
    match (status, mode) {
        (Status::Win(mark), _) => format!("{mark} wins!"),
        (Status::Draw, _) => "Draw!".to_owned(),
        (Status::AwaitingHuman(mark), GameMode::PlayerVsPlayer) => format!("Next: {mark}"),
        (Status::AwaitingHuman(mark), GameMode::PlayerVsComputer) => format!("Your move ({mark})"),
        (Status::AwaitingComputer, _) => {
            let mark = mode.computer_mark().map_or(String::new(), |m| format!(" ({m})"));
            format!("AI's move{mark}")
        }
    }
}

/// Two centered lines: the game mode and the status headline.
#[derive(Debug)]
pub struct StatusDisplay<'a> {
    state: &'a GameState,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn height() -> u16 {
        2
    }
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.state.mode();
        Text::from(vec![
            Line::styled(format!("Mode: {mode}"), style::MODE),
            Line::styled(status_text(self.state.status(), mode), style::STATUS),
        ])
        .centered()
        .render(area, buf);
    }
}
