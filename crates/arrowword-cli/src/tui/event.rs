use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Periodic update, driven by the tick interval.
    Tick,
    /// Redraw request after something changed.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
