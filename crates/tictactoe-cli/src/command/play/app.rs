use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;
use tictactoe_engine::GameMode;

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Tui},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
    fps: u64,
}

impl PlayApp {
    pub fn new(mode: GameMode, fps: u64, computer_delay: Duration) -> Self {
        Self {
            screen: PlayScreen::new(mode, fps, computer_delay),
            fps,
        }
    }
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(self.fps as f64);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update();
    }
}
