use std::time::Instant;

use arrowword_engine::{
    AiMove, FIRST_MOVE_DELAY, FillOutcome, GameSession, GenerateError, MOVE_INTERVAL,
    NewBoardError, Owner, Position, SessionState, WordCompletion,
};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::Style,
    text::Line,
    widgets::Block,
};

use crate::view::widgets::{
    BoardDisplay, ClueDisplay, KeyBinding, KeyBindingDisplay, RackDisplay, ScoreDisplay, style,
};

const PLAYER_KEYS: &[KeyBinding] = &[
    ("←↑↓→", "move"),
    ("1-5", "tile"),
    ("Enter", "fill"),
    ("p", "pass"),
    ("s", "shuffle"),
    ("v", "reveal"),
    ("n", "new board"),
    ("q", "quit"),
];
const AI_TURN_KEYS: &[KeyBinding] = &[("←↑↓→", "move"), ("q", "quit")];
const FINISHED_KEYS: &[KeyBinding] = &[("←↑↓→", "move"), ("n", "new board"), ("q", "quit")];

const SIDE_PANEL_WIDTH: u16 = 30;

#[derive(Debug)]
struct Status {
    text: String,
    style: Style,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style::DEFAULT,
        }
    }

    fn good(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style::GOOD,
        }
    }

    fn bad(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style::BAD,
        }
    }
}

/// The board being played, with a cursor and paced AI turns.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    cursor: Position,
    status: Status,
    next_ai_move_at: Option<Instant>,
    failure: Option<GenerateError>,
    is_exiting: bool,
}

impl GameScreen {
    pub fn new(session: GameSession) -> Self {
        let cursor = initial_cursor(&session);
        Self {
            session,
            cursor,
            status: Status::info("Your turn: pick a tile and fill a cell"),
            next_ai_move_at: None,
            failure: None,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting || self.failure.is_some()
    }

    pub fn into_failure(self) -> Option<GenerateError> {
        self.failure
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        let state = self.session.state();
        match event.code {
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Char(ch @ '1'..='9') if state.is_player_turn() => {
                let index = ch.to_digit(10).map_or(0, |digit| digit as usize - 1);
                match self.session.select_rack_tile(index) {
                    Ok(Some(_)) => {}
                    Ok(None) => self.status = Status::info("Tile deselected"),
                    Err(err) => self.status = Status::bad(err.to_string()),
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if state.is_player_turn() => self.fill(),
            KeyCode::Char('p') if state.is_player_turn() => self.pass(now),
            KeyCode::Char('s') if state.is_player_turn() => {
                if let Err(err) = self.session.shuffle_rack() {
                    self.status = Status::bad(err.to_string());
                }
            }
            KeyCode::Char('v') if state.is_player_turn() => match self.session.solve() {
                Ok(revealed) => {
                    self.status = Status::info(format!(
                        "Revealed {revealed} cells. {} Press n for a new board",
                        self.result_text()
                    ));
                }
                Err(err) => self.status = Status::bad(err.to_string()),
            },
            KeyCode::Char('n') if !state.is_ai_turn() => self.new_board(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    /// Plays the next AI move once its delay has elapsed.
    pub fn update(&mut self, now: Instant) {
        if !self.session.state().is_ai_turn() {
            self.next_ai_move_at = None;
            return;
        }
        let due = *self
            .next_ai_move_at
            .get_or_insert_with(|| now + FIRST_MOVE_DELAY);
        if now < due {
            return;
        }

        let ai_move = self.session.step_ai();
        self.next_ai_move_at = Some(now + MOVE_INTERVAL);
        match self.session.state() {
            SessionState::Finished => {
                self.next_ai_move_at = None;
                self.status = Status::info(format!(
                    "Board complete. {} Press n for a new board",
                    self.result_text()
                ));
            }
            SessionState::PlayerTurn => {
                self.next_ai_move_at = None;
                let prefix = ai_move.as_ref().map(describe_ai_move).unwrap_or_default();
                self.status = Status::info(format!("{prefix}Your turn"));
            }
            SessionState::AiTurn { .. } => {
                if let Some(ai_move) = &ai_move {
                    self.status = Status::info(describe_ai_move(ai_move));
                }
            }
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let board = self.session.board();
        let row = self
            .cursor
            .row
            .saturating_add_signed(d_row)
            .min(board.rows() - 1);
        let col = self
            .cursor
            .col
            .saturating_add_signed(d_col)
            .min(board.cols() - 1);
        self.cursor = Position::new(row, col);
    }

    fn fill(&mut self) {
        match self.session.attempt_fill(self.cursor) {
            Ok(FillOutcome::Correct {
                letter,
                points,
                completed,
            }) => {
                let mut text = format!("{letter} is correct: +{points}");
                for WordCompletion { word, bonus } in &completed {
                    text.push_str(&format!(" ({word} complete, +{bonus})"));
                }
                if self.session.state().is_finished() {
                    text.push_str(&format!(". Board complete. {}", self.result_text()));
                }
                self.status = Status::good(text);
            }
            Ok(FillOutcome::Incorrect { letter, penalty }) => {
                self.status = Status::bad(format!("{letter} does not fit here: -{penalty}"));
            }
            Err(err) => self.status = Status::bad(err.to_string()),
        }
    }

    fn pass(&mut self, now: Instant) {
        match self.session.pass_turn() {
            Ok(moves) => {
                self.next_ai_move_at = Some(now + FIRST_MOVE_DELAY);
                let plural = if moves == 1 { "" } else { "s" };
                self.status = Status::info(format!("AI is playing {moves} move{plural}..."));
            }
            Err(err) => self.status = Status::bad(err.to_string()),
        }
    }

    fn new_board(&mut self) {
        match self.session.new_board() {
            Ok(()) => {
                self.cursor = initial_cursor(&self.session);
                self.next_ai_move_at = None;
                self.status = Status::info("New board. Your turn");
            }
            Err(NewBoardError::Generate(err)) => {
                tracing::error!(%err, "could not generate a new board");
                self.failure = Some(err);
            }
            Err(err @ NewBoardError::AiTurnInProgress) => {
                self.status = Status::bad(err.to_string());
            }
        }
    }

    fn result_text(&self) -> &'static str {
        match self.session.scores().leader() {
            Some(Owner::Player) => "You are ahead!",
            Some(Owner::Ai) => "The AI is ahead.",
            None => "It's a tie.",
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let state = self.session.state();
        let border_style = match state {
            SessionState::PlayerTurn => style::PLAYER_FG,
            SessionState::AiTurn { .. } => style::AI_FG,
            SessionState::Finished => style::DIM,
        };

        let board = BoardDisplay::new(self.session.puzzle(), self.session.fill())
            .cursor(self.cursor)
            .block(
                Block::bordered()
                    .title(Line::from(" ARROWWORD ").centered())
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let scores = ScoreDisplay::new(&self.session).block(
            Block::bordered()
                .title(Line::from(" SCORE ").centered())
                .style(style::DEFAULT),
        );
        let clues = ClueDisplay::new(self.session.puzzle(), self.session.fill(), self.cursor)
            .block(
                Block::bordered()
                    .title(Line::from(" CLUES ").centered())
                    .style(style::DEFAULT),
            );
        let rack = RackDisplay::new(self.session.rack())
            .active(state.is_player_turn())
            .block(
                Block::bordered()
                    .title(Line::from(" RACK ").centered())
                    .style(style::DEFAULT),
            );
        let keys = match state {
            SessionState::PlayerTurn => PLAYER_KEYS,
            SessionState::AiTurn { .. } => AI_TURN_KEYS,
            SessionState::Finished => FINISHED_KEYS,
        };

        let [main_area, rack_area, status_area, help_area] = frame.area().layout(
            &Layout::vertical([
                Constraint::Length(board.height().max(scores.height() + 4)),
                Constraint::Length(rack.height()),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center),
        );
        let [board_area, side_area] = main_area.layout(
            &Layout::horizontal([
                Constraint::Length(board.width()),
                Constraint::Length(SIDE_PANEL_WIDTH),
            ])
            .flex(Flex::Center),
        );
        let [scores_area, clues_area] = side_area.layout(&Layout::vertical([
            Constraint::Length(scores.height()),
            Constraint::Fill(1),
        ]));
        let [rack_area] =
            rack_area.layout(&Layout::horizontal([Constraint::Length(rack.width())]).flex(Flex::Center));

        frame.render_widget(&board, board_area);
        frame.render_widget(scores, scores_area);
        frame.render_widget(clues, clues_area);
        frame.render_widget(rack, rack_area);
        frame.render_widget(
            Line::styled(self.status.text.as_str(), self.status.style).centered(),
            status_area,
        );
        frame.render_widget(KeyBindingDisplay::new(keys), help_area);
    }
}

fn initial_cursor(session: &GameSession) -> Position {
    session
        .open_cells()
        .first()
        .copied()
        .unwrap_or(Position::new(1, 1))
}

fn describe_ai_move(ai_move: &AiMove) -> String {
    let mut text = format!(
        "AI filled {} at {}: +{}",
        ai_move.letter, ai_move.pos, ai_move.points
    );
    for completion in &ai_move.completed {
        text.push_str(&format!(" ({} complete)", completion.word));
    }
    text.push_str(". ");
    text
}

#[cfg(test)]
mod tests {
    use arrowword_engine::{Difficulty, GameSeed, SessionConfig};
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::util;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen(difficulty: Difficulty) -> GameScreen {
        let vocabulary = util::read_vocabulary(None, 8).unwrap();
        let config = SessionConfig {
            difficulty,
            ..SessionConfig::default()
        };
        let session = GameSession::start(vocabulary, config, GameSeed::from_u128(21)).unwrap();
        GameScreen::new(session)
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut screen = screen(Difficulty::Easy);
        let now = Instant::now();
        for _ in 0..20 {
            screen.handle_event(&key(KeyCode::Up), now);
            screen.handle_event(&key(KeyCode::Left), now);
        }
        assert_eq!(screen.cursor, Position::new(0, 0));
        for _ in 0..20 {
            screen.handle_event(&key(KeyCode::Down), now);
            screen.handle_event(&key(KeyCode::Right), now);
        }
        let board = screen.session().board();
        assert_eq!(screen.cursor, Position::new(board.rows() - 1, board.cols() - 1));
    }

    #[test]
    fn test_ai_moves_are_paced() {
        let mut screen = screen(Difficulty::Hard);
        let start = Instant::now();
        screen.handle_event(&key(KeyCode::Char('p')), start);
        assert!(screen.session().state().is_ai_turn());

        screen.update(start);
        assert!(screen.session().fill().is_empty());

        let mut now = start + FIRST_MOVE_DELAY;
        screen.update(now);
        assert_eq!(screen.session().fill().len(), 1);

        while screen.session().state().is_ai_turn() {
            now += MOVE_INTERVAL;
            screen.update(now);
        }
        let filled = screen.session().fill().count_by(Owner::Ai);
        assert!((2..=4).contains(&filled));
        assert!(screen.session().state().is_player_turn());
    }

    #[test]
    fn test_player_keys_ignored_during_ai_turn() {
        let mut screen = screen(Difficulty::Easy);
        let now = Instant::now();
        screen.handle_event(&key(KeyCode::Char('p')), now);
        screen.handle_event(&key(KeyCode::Char('v')), now);
        screen.handle_event(&key(KeyCode::Char('n')), now);
        assert!(screen.session().state().is_ai_turn());
        assert!(screen.session().fill().is_empty());
    }

    #[test]
    fn test_reveal_then_new_board() {
        let mut screen = screen(Difficulty::Medium);
        let now = Instant::now();
        screen.handle_event(&key(KeyCode::Char('v')), now);
        assert!(screen.session().state().is_finished());
        screen.handle_event(&key(KeyCode::Char('n')), now);
        assert!(screen.session().state().is_player_turn());
        assert!(screen.session().fill().is_empty());
        assert!(!screen.should_exit());
    }
}
