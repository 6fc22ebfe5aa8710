pub use self::{board_display::*, status_display::*};

mod board_display;
mod status_display;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const MARK_X: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const MARK_O: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(Color::DarkGray);
    pub const GRID: Style = Style::new().fg(Color::Gray);
    pub const WIN: Style = Style::new().bg(Color::Green);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const STATUS: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const MODE: Style = Style::new().fg(Color::Gray);
}
