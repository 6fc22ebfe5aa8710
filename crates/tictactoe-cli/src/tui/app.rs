use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// A game screen run by [`Tui::run`].
///
/// Terminal input arrives through `handle_event`, the game clock through
/// `update`, and the board is redrawn with `draw` after either.
pub trait App {
    /// Sets the tick rate that paces the game clock, and with it the frame
    /// countdown before the computer's move.
    fn init(&mut self, tui: &mut Tui);

    /// `true` once the player has asked to quit.
    fn should_exit(&self) -> bool;

    /// Key presses for cursor movement, cell selection, mode and restart.
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// One game-clock tick: lets the computer plan or play its pending move.
    fn update(&mut self, tui: &mut Tui);
}
