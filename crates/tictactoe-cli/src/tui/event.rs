use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// One step of application logic.
    Tick,
    /// The screen needs to be redrawn.
    Render,
    Crossterm(CrosstermEvent),
}
