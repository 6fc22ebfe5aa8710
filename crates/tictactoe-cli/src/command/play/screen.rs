use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::Text,
};
use tictactoe_advisor::ComputerPlayer;
use tictactoe_engine::{GameMode, GameSession, Position, TransitionError};

use crate::ui::widgets::{BoardDisplay, StatusDisplay};

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    computer: ComputerPlayer<'static>,
    cursor: Position,
    notice: Option<String>,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(mode: GameMode, fps: u64, computer_delay: Duration) -> Self {
        Self {
            session: GameSession::new(mode, fps, computer_delay),
            computer: ComputerPlayer::heuristic(),
            cursor: Position::CENTER,
            notice: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let state = self.session.state();
        let board_display = BoardDisplay::new(state).cursor(self.cursor);
        let status_display = StatusDisplay::new(state);
        let notice = Text::from(self.notice.as_deref().unwrap_or_default())
            .style(Style::default().fg(Color::Yellow))
            .centered();
        let help_text = Text::from(
            "Controls: ← ↑ → ↓ (Move) | Enter (Play) | 1-9 (Play cell) | P (vs Player) | C (vs Computer) | R (Restart) | Q (Quit)",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();

        let [status_area, board_area, notice_area, help_area] = Layout::vertical([
            Constraint::Length(StatusDisplay::height()),
            Constraint::Length(board_display.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(board_display.width())])
            .flex(Flex::Center)
            .areas(board_area);

        frame.render_widget(status_display, status_area);
        frame.render_widget(&board_display, board_area);
        frame.render_widget(notice, notice_area);
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(*key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
            KeyCode::Char('p' | 'P') => self.select_mode(GameMode::PlayerVsPlayer),
            KeyCode::Char('c' | 'C') => self.select_mode(GameMode::PlayerVsComputer),
            KeyCode::Char('r' | 'R') => {
                self.session.restart();
                self.notice = None;
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    /// Advances the game loop: lets the computer plan and play its move.
    pub fn update(&mut self) {
        match self.computer.drive(&mut self.session) {
            Some(Ok(())) => self.notice = None,
            Some(Err(TransitionError::StaleMove(_))) | None => {}
            Some(Err(err)) => {
                tracing::warn!(%err, "computer move failed");
                self.notice = Some(format!("Computer cannot move: {err}"));
            }
        }
    }

    fn select(&mut self, pos: Position) {
        match self.session.select_cell(pos) {
            Ok(()) => self.notice = None,
            Err(err) => {
                tracing::debug!(%err, %pos, "ignored cell selection");
                self.notice = Some(err.to_string());
            }
        }
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.session.select_mode(mode);
        self.notice = Some(format!("Mode: {mode}"));
    }

    fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let row = self.cursor.row().checked_add_signed(drow);
        let col = self.cursor.col().checked_add_signed(dcol);
        if let (Some(row), Some(col)) = (row, col)
            && let Some(pos) = Position::new(row, col)
        {
            self.cursor = pos;
        }
    }
}
