use std::time::Instant;

use arrowword_engine::{
    Difficulty, GameSeed, GameSession, GenerateError, Scoreboard, SessionConfig, Vocabulary,
};
use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::screens::{GameScreen, Screen, StartMenuScreen},
    tui::{App, Tui},
};

const TICK_RATE: f64 = 20.0;

/// Everything needed to start a session once the difficulty is known.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub vocabulary: Vocabulary,
    pub config: SessionConfig,
    pub seed: GameSeed,
}

#[derive(Debug)]
pub struct PlayApp {
    setup: GameSetup,
    screen: Screen,
    failure: Option<GenerateError>,
}

impl PlayApp {
    /// Opens the start menu, or goes straight to the board when the
    /// difficulty is already chosen.
    pub fn new(setup: GameSetup, difficulty: Option<Difficulty>) -> Self {
        let mut app = Self {
            setup,
            screen: Screen::StartMenu(StartMenuScreen::new()),
            failure: None,
        };
        if let Some(difficulty) = difficulty {
            app.start_game(difficulty);
        }
        app
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        let config = SessionConfig {
            difficulty,
            ..self.setup.config.clone()
        };
        match GameSession::start(self.setup.vocabulary.clone(), config, self.setup.seed) {
            Ok(session) => self.screen = Screen::Game(GameScreen::new(session)),
            Err(err) => {
                tracing::error!(%err, "could not start a game");
                self.failure = Some(err);
            }
        }
    }

    /// Scores of the game played, if any.
    pub fn scores(&self) -> Option<Scoreboard> {
        match &self.screen {
            Screen::Game(screen) => Some(*screen.session().scores()),
            Screen::StartMenu(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<GenerateError> {
        self.failure.or_else(|| self.screen.into_failure())
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
    }

    fn should_exit(&self) -> bool {
        self.failure.is_some() || self.screen.should_exit()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        self.screen.handle_event(&event, Instant::now());
        if let Some(difficulty) = self.screen.chosen_difficulty() {
            self.start_game(difficulty);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update(Instant::now());
    }
}
