use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Application driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event. Configure the tick rate here.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances time-based state. Called on every tick.
    fn update(&mut self, tui: &mut Tui);
}
