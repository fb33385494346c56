use std::time::Instant;

use arrowword_engine::{Difficulty, GenerateError};
use crossterm::event::Event;
use ratatui::Frame;

pub use self::{game::GameScreen, start_menu::StartMenuScreen};

mod game;
mod start_menu;

#[derive(Debug)]
pub enum Screen {
    StartMenu(StartMenuScreen),
    Game(GameScreen),
}

impl Screen {
    pub fn should_exit(&self) -> bool {
        match self {
            Screen::StartMenu(screen) => screen.is_exiting(),
            Screen::Game(screen) => screen.should_exit(),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        match self {
            Screen::StartMenu(screen) => screen.draw(frame),
            Screen::Game(screen) => screen.draw(frame),
        }
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match self {
            Screen::StartMenu(screen) => screen.handle_event(event),
            Screen::Game(screen) => screen.handle_event(event, now),
        }
    }

    pub fn update(&mut self, now: Instant) {
        match self {
            Screen::StartMenu(_) => {}
            Screen::Game(screen) => screen.update(now),
        }
    }

    /// The difficulty picked in the start menu, once confirmed.
    pub fn chosen_difficulty(&self) -> Option<Difficulty> {
        match self {
            Screen::StartMenu(screen) => screen.chosen(),
            Screen::Game(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<GenerateError> {
        match self {
            Screen::StartMenu(_) => None,
            Screen::Game(screen) => screen.into_failure(),
        }
    }
}
