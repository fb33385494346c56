use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    GenerateError, IllegalFillError, NewBoardError, RackError, TurnError,
    core::{Board, PlacedWord, Position, Vocabulary},
    generator::{BoardGenerator, GeneratorConfig, Puzzle},
};

use super::{
    Difficulty, FillState, FilledCell, GameSeed, Opponent, Owner, Rack, RandomOpponent,
    Scoreboard,
};

/// Settings for a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub generator: GeneratorConfig,
    /// How many times [`BoardGenerator::generate`] is retried before giving up.
    pub max_generation_rounds: usize,
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            max_generation_rounds: 10,
            difficulty: Difficulty::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    PlayerTurn,
    AiTurn { moves_left: usize },
    Finished,
}

/// A word fully filled by the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCompletion {
    pub word: String,
    pub bonus: i64,
}

/// Result of a legal fill attempt by the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum FillOutcome {
    /// The letter was written. `points` includes the completion bonuses.
    Correct {
        letter: char,
        points: i64,
        completed: Vec<WordCompletion>,
    },
    /// The letter was wrong and discarded.
    Incorrect { letter: char, penalty: i64 },
}

/// One cell filled by the AI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiMove {
    pub pos: Position,
    pub letter: char,
    pub points: i64,
    pub completed: Vec<WordCompletion>,
}

/// A game of the player against the AI on one board at a time.
///
/// The generated [`Puzzle`] is never modified; progress lives in a
/// [`FillState`] overlay. All randomness (board generation, rack refills and
/// the opponent's choices) is drawn from one generator seeded by the
/// session's [`GameSeed`], so a seed and a sequence of player actions always
/// replay the same game.
///
/// # Turn Flow
///
/// 1. The player fills any number of cells from the rack, then passes
/// 2. The opponent plans a number of moves; each [`GameSession::step_ai`]
///    fills one open cell with its correct letter
/// 3. Once the planned moves are done, the player's rack is topped up and
///    the turn returns to the player
///
/// The session is [`SessionState::Finished`] once no open letter cell is
/// left, either by play or by [`GameSession::solve`].
#[derive(Debug)]
pub struct GameSession {
    vocabulary: Vocabulary,
    generator: BoardGenerator,
    max_generation_rounds: usize,
    difficulty: Difficulty,
    seed: GameSeed,
    rng: Pcg32,
    opponent: Box<dyn Opponent>,
    puzzle: Puzzle,
    fill: FillState,
    rack: Rack,
    scores: Scoreboard,
    state: SessionState,
}

impl GameSession {
    /// Generates the first board and deals the player's rack.
    ///
    /// Generation is retried up to `config.max_generation_rounds` times when
    /// it fails for lack of density; other generator errors are returned
    /// immediately.
    #[tracing::instrument(level = "info", skip_all, fields(%seed, difficulty = %config.difficulty))]
    pub fn start(
        vocabulary: Vocabulary,
        config: SessionConfig,
        seed: GameSeed,
    ) -> Result<Self, GenerateError> {
        let generator = BoardGenerator::new(config.generator.clone());
        let mut rng = seed.rng();
        let puzzle = generate_puzzle(
            &generator,
            &vocabulary,
            config.max_generation_rounds,
            &mut rng,
        )?;
        Ok(Self::assemble(vocabulary, puzzle, config, seed, rng))
    }

    /// Starts a session on an already generated puzzle.
    ///
    /// `vocabulary` is only used by [`GameSession::new_board`].
    #[must_use]
    pub fn from_puzzle(
        vocabulary: Vocabulary,
        puzzle: Puzzle,
        config: SessionConfig,
        seed: GameSeed,
    ) -> Self {
        Self::assemble(vocabulary, puzzle, config, seed, seed.rng())
    }

    fn assemble(
        vocabulary: Vocabulary,
        puzzle: Puzzle,
        config: SessionConfig,
        seed: GameSeed,
        rng: Pcg32,
    ) -> Self {
        let SessionConfig {
            generator,
            max_generation_rounds,
            difficulty,
        } = config;
        let mut session = Self {
            vocabulary,
            generator: BoardGenerator::new(generator),
            max_generation_rounds,
            difficulty,
            seed,
            rng,
            opponent: Box::new(RandomOpponent::new(difficulty)),
            puzzle,
            fill: FillState::new(),
            rack: Rack::new(),
            scores: Scoreboard::new(),
            state: SessionState::PlayerTurn,
        };
        session.refill_rack();
        tracing::info!(
            words = session.puzzle.words().len(),
            open = session.open_cell_count(),
            "session started"
        );
        session
    }

    /// Replaces the move policy of the computer side.
    #[must_use]
    pub fn with_opponent(mut self, opponent: Box<dyn Opponent>) -> Self {
        self.opponent = opponent;
        self
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.puzzle.board()
    }

    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        self.puzzle.words()
    }

    #[must_use]
    pub fn fill(&self) -> &FillState {
        &self.fill
    }

    #[must_use]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    #[must_use]
    pub fn selected_tile(&self) -> Option<char> {
        self.rack.selected_tile()
    }

    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Letter cells not filled yet, in row-major order.
    #[must_use]
    pub fn open_cells(&self) -> Vec<Position> {
        self.open_letters().map(|(pos, _)| pos).collect()
    }

    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.open_letters().count()
    }

    /// Words whose every letter is filled.
    pub fn completed_words(&self) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.puzzle
            .words()
            .iter()
            .filter(|word| word.positions().all(|pos| self.fill.contains(pos)))
    }

    fn open_letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let board = self.puzzle.board();
        board
            .letter_positions()
            .filter(|pos| !self.fill.contains(*pos))
            .filter_map(|pos| board.letter_at(pos).map(|letter| (pos, letter)))
    }

    /// Toggles the selection of a rack tile.
    pub fn select_rack_tile(&mut self, index: usize) -> Result<Option<usize>, RackError> {
        if !self.state.is_player_turn() {
            return Err(RackError::NotPlayerTurn);
        }
        self.rack.toggle(index)
    }

    /// Plays the selected tile on `pos`.
    ///
    /// A rejected attempt leaves the session untouched. A legal attempt
    /// consumes the tile whether or not it matches.
    pub fn attempt_fill(&mut self, pos: Position) -> Result<FillOutcome, IllegalFillError> {
        if !self.state.is_player_turn() {
            return Err(IllegalFillError::NotPlayerTurn);
        }
        let cell = self
            .puzzle
            .board()
            .get(pos)
            .ok_or(IllegalFillError::OutOfBounds(pos))?;
        let expected = cell
            .as_letter()
            .ok_or(IllegalFillError::NotLetterCell(pos))?;
        if self.fill.contains(pos) {
            return Err(IllegalFillError::AlreadyFilled(pos));
        }
        let letter = self
            .rack
            .take_selected()
            .ok_or(IllegalFillError::NoTileSelected)?;

        let outcome = if letter == expected {
            let (points, completed) = self.fill_cell(pos, letter, Owner::Player);
            FillOutcome::Correct {
                letter,
                points,
                completed,
            }
        } else {
            let penalty = self.scores.record_miss(Owner::Player);
            FillOutcome::Incorrect { letter, penalty }
        };
        tracing::debug!(%pos, ?outcome, "player fill");

        if self.open_cell_count() == 0 {
            self.finish();
        } else if self.rack.is_empty() {
            self.refill_rack();
        }
        Ok(outcome)
    }

    /// Hands the turn to the opponent and returns the number of planned moves.
    pub fn pass_turn(&mut self) -> Result<usize, TurnError> {
        if !self.state.is_player_turn() {
            return Err(TurnError::NotPlayerTurn);
        }
        self.rack.deselect();
        let moves_left = self.opponent.plan_moves(&mut self.rng);
        self.state = SessionState::AiTurn { moves_left };
        tracing::debug!(moves_left, "player passed");
        Ok(moves_left)
    }

    /// Makes one opponent move.
    ///
    /// Returns `None` when it is not the opponent's turn, or when the turn
    /// ends without a move. After the last planned move the turn goes back to
    /// the player.
    pub fn step_ai(&mut self) -> Option<AiMove> {
        let SessionState::AiTurn { moves_left } = self.state else {
            return None;
        };
        let open = self.open_cells();
        let choice = if moves_left > 0 {
            self.opponent.choose_cell(&open, &mut self.rng)
        } else {
            None
        };
        let Some(pos) = choice.and_then(|index| open.get(index).copied()) else {
            self.end_ai_turn();
            return None;
        };
        let Some(letter) = self.puzzle.board().letter_at(pos) else {
            self.end_ai_turn();
            return None;
        };

        let (points, completed) = self.fill_cell(pos, letter, Owner::Ai);
        let moves_left = moves_left - 1;
        tracing::debug!(%pos, %letter, points, moves_left, "ai fill");

        if self.open_cell_count() == 0 {
            self.finish();
        } else if moves_left == 0 {
            self.end_ai_turn();
        } else {
            self.state = SessionState::AiTurn { moves_left };
        }
        Some(AiMove {
            pos,
            letter,
            points,
            completed,
        })
    }

    /// Runs the rest of the opponent's turn without pacing.
    pub fn play_ai_turn(&mut self) -> Vec<AiMove> {
        let mut moves = vec![];
        while self.state.is_ai_turn() {
            match self.step_ai() {
                Some(ai_move) => moves.push(ai_move),
                None => break,
            }
        }
        moves
    }

    pub fn shuffle_rack(&mut self) -> Result<(), TurnError> {
        if !self.state.is_player_turn() {
            return Err(TurnError::NotPlayerTurn);
        }
        self.rack.shuffle(&mut self.rng);
        Ok(())
    }

    /// Reveals every open cell as the player's and ends the board.
    ///
    /// Revealing is a forfeit: no points and no completion bonuses are
    /// awarded. Returns the number of revealed cells.
    pub fn solve(&mut self) -> Result<usize, TurnError> {
        if !self.state.is_player_turn() {
            return Err(TurnError::NotPlayerTurn);
        }
        let open: Vec<_> = self.open_letters().collect();
        for &(pos, letter) in &open {
            self.fill.insert(
                pos,
                FilledCell {
                    letter,
                    owner: Owner::Player,
                },
            );
        }
        self.finish();
        tracing::info!(revealed = open.len(), "board revealed");
        Ok(open.len())
    }

    /// Replaces the board with a freshly generated one.
    ///
    /// Scores carry over; the fill state and the rack start over and the
    /// player moves first. Refused while an AI turn still has moves left.
    pub fn new_board(&mut self) -> Result<(), NewBoardError> {
        if self.state.is_ai_turn() {
            return Err(NewBoardError::AiTurnInProgress);
        }
        let puzzle = generate_puzzle(
            &self.generator,
            &self.vocabulary,
            self.max_generation_rounds,
            &mut self.rng,
        )?;
        self.puzzle = puzzle;
        self.fill = FillState::new();
        self.rack.clear();
        self.state = SessionState::PlayerTurn;
        self.refill_rack();
        tracing::info!(
            words = self.puzzle.words().len(),
            open = self.open_cell_count(),
            "new board"
        );
        Ok(())
    }

    /// Writes a correct letter and credits the points and completion bonuses.
    fn fill_cell(
        &mut self,
        pos: Position,
        letter: char,
        owner: Owner,
    ) -> (i64, Vec<WordCompletion>) {
        self.fill.insert(pos, FilledCell { letter, owner });
        let mut points = self.scores.record_correct(owner);

        let finished: Vec<_> = self
            .puzzle
            .words_at(pos)
            .filter(|word| word.positions().all(|p| self.fill.contains(p)))
            .map(|word| (word.display.clone(), word.len()))
            .collect();
        let completed: Vec<_> = finished
            .into_iter()
            .map(|(word, len)| {
                let bonus = self.scores.record_word(owner, len);
                points += bonus;
                WordCompletion { word, bonus }
            })
            .collect();
        (points, completed)
    }

    fn refill_rack(&mut self) {
        let needed: Vec<char> = self.open_letters().map(|(_, letter)| letter).collect();
        self.rack.replenish(&needed, &mut self.rng);
    }

    fn end_ai_turn(&mut self) {
        self.state = SessionState::PlayerTurn;
        self.refill_rack();
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        self.rack.deselect();
        tracing::info!(
            player = self.scores.side(Owner::Player).score(),
            ai = self.scores.side(Owner::Ai).score(),
            "board finished"
        );
    }
}

fn generate_puzzle(
    generator: &BoardGenerator,
    vocabulary: &Vocabulary,
    max_rounds: usize,
    rng: &mut Pcg32,
) -> Result<Puzzle, GenerateError> {
    let max_rounds = max_rounds.max(1);
    let mut round = 1;
    loop {
        match generator.generate(vocabulary, rng) {
            Err(GenerateError::GenerationFailed { .. }) if round < max_rounds => {
                tracing::warn!(round, max_rounds, "retrying board generation");
                round += 1;
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, ClueHints, Direction, VocabularyEntry};

    fn vocabulary() -> Vocabulary {
        [
            ("casa", "house"),
            ("perro", "dog"),
            ("gato", "cat"),
            ("agua", "water"),
            ("libro", "book"),
            ("mesa", "table"),
            ("silla", "chair"),
            ("sol", "sun"),
            ("luna", "moon"),
            ("mar", "sea"),
            ("rojo", "red"),
            ("azul", "blue"),
            ("verde", "green"),
            ("leche", "milk"),
            ("pan", "bread"),
            ("tren", "train"),
            ("calle", "street"),
            ("amigo", "friend"),
            ("oso", "bear"),
            ("toro", "bull"),
        ]
        .into_iter()
        .map(|(word, hint)| VocabularyEntry::new(word, hint))
        .collect()
    }

    fn session(difficulty: Difficulty, seed: u128) -> GameSession {
        let config = SessionConfig {
            difficulty,
            ..SessionConfig::default()
        };
        GameSession::start(vocabulary(), config, GameSeed::from_u128(seed)).unwrap()
    }

    /// A 3x5 board holding only "SOL" at row 1, with its clue at (1, 1).
    fn sol_session() -> GameSession {
        let mut board = Board::new(3, 5);
        for row in 0..3 {
            for col in 0..5 {
                board.set(Position::new(row, col), Cell::Filler);
            }
        }
        board.set(
            Position::new(1, 1),
            Cell::Clue(ClueHints {
                right: Some("sun".into()),
                down: None,
            }),
        );
        for (i, ch) in "SOL".chars().enumerate() {
            board.set(Position::new(1, 2 + i), Cell::letter(ch));
        }
        let words = vec![PlacedWord {
            text: "SOL".into(),
            display: "sol".into(),
            hint: "sun".into(),
            start: Position::new(1, 2),
            direction: Direction::Horizontal,
        }];
        GameSession::from_puzzle(
            vocabulary(),
            Puzzle::new(board, words),
            SessionConfig::default(),
            GameSeed::from_u128(1),
        )
    }

    fn select(session: &mut GameSession, letter: char) {
        session.rack = Rack::from_tiles([letter]);
        session.select_rack_tile(0).unwrap();
    }

    #[test]
    fn test_start_deals_full_rack() {
        let session = session(Difficulty::Easy, 1);
        assert!(session.state().is_player_turn());
        assert_eq!(session.rack().len(), crate::RACK_SIZE);
        assert!(session.fill().is_empty());
        assert_eq!(
            session.open_cell_count(),
            session.board().letter_positions().count()
        );
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = session(Difficulty::Medium, 77);
        let b = session(Difficulty::Medium, 77);
        assert_eq!(a.puzzle(), b.puzzle());
        assert_eq!(a.rack(), b.rack());
    }

    #[test]
    fn test_start_fails_on_empty_vocabulary() {
        let result = GameSession::start(
            Vocabulary::default(),
            SessionConfig::default(),
            GameSeed::from_u128(0),
        );
        assert_eq!(result.err(), Some(GenerateError::EmptyVocabulary));
    }

    #[test]
    fn test_start_gives_up_after_bounded_rounds() {
        let config = SessionConfig {
            generator: GeneratorConfig {
                min_words: 50,
                max_attempts: 2,
                ..GeneratorConfig::default()
            },
            max_generation_rounds: 3,
            ..SessionConfig::default()
        };
        let result = GameSession::start(vocabulary(), config, GameSeed::from_u128(0));
        assert!(matches!(
            result,
            Err(GenerateError::GenerationFailed { attempts: 2, .. })
        ));
    }

    #[test]
    fn test_fill_on_clue_rejected_with_or_without_selection() {
        let mut session = sol_session();
        let clue = Position::new(1, 1);
        assert_eq!(
            session.attempt_fill(clue),
            Err(IllegalFillError::NotLetterCell(clue))
        );
        select(&mut session, 'S');
        assert_eq!(
            session.attempt_fill(clue),
            Err(IllegalFillError::NotLetterCell(clue))
        );
        assert!(session.fill().is_empty());
        assert_eq!(session.selected_tile(), Some('S'));
        assert_eq!(session.scores(), &Scoreboard::new());
    }

    #[test]
    fn test_rejections_leave_session_untouched() {
        let mut session = sol_session();
        assert_eq!(
            session.attempt_fill(Position::new(1, 2)),
            Err(IllegalFillError::NoTileSelected)
        );
        assert_eq!(
            session.attempt_fill(Position::new(7, 2)),
            Err(IllegalFillError::OutOfBounds(Position::new(7, 2)))
        );
        assert_eq!(
            session.attempt_fill(Position::new(0, 0)),
            Err(IllegalFillError::NotLetterCell(Position::new(0, 0)))
        );

        select(&mut session, 'S');
        session.attempt_fill(Position::new(1, 2)).unwrap();
        select(&mut session, 'S');
        assert_eq!(
            session.attempt_fill(Position::new(1, 2)),
            Err(IllegalFillError::AlreadyFilled(Position::new(1, 2)))
        );
        assert_eq!(session.selected_tile(), Some('S'));
    }

    #[test]
    fn test_completing_sol_scores_four() {
        let mut session = sol_session();
        for (col, letter) in [(2, 'S'), (3, 'O')] {
            select(&mut session, letter);
            assert!(session.attempt_fill(Position::new(1, col)).unwrap().is_correct());
        }
        assert_eq!(session.scores().side(Owner::Player).score(), 2);

        select(&mut session, 'L');
        let outcome = session.attempt_fill(Position::new(1, 4)).unwrap();
        assert_eq!(
            outcome,
            FillOutcome::Correct {
                letter: 'L',
                points: 4,
                completed: vec![WordCompletion {
                    word: "sol".into(),
                    bonus: 3,
                }],
            }
        );
        let player = session.scores().side(Owner::Player);
        assert_eq!(player.score(), 6);
        assert_eq!(player.words_completed(), 1);
        assert!(session.state().is_finished());
        assert_eq!(session.completed_words().count(), 1);
    }

    #[test]
    fn test_wrong_letter_costs_one_and_consumes_tile() {
        let mut session = sol_session();
        session.rack = Rack::from_tiles(['X', 'S']);
        session.select_rack_tile(0).unwrap();
        let outcome = session.attempt_fill(Position::new(1, 2)).unwrap();
        assert_eq!(
            outcome,
            FillOutcome::Incorrect {
                letter: 'X',
                penalty: 1,
            }
        );
        assert_eq!(session.scores().side(Owner::Player).score(), -1);
        assert!(session.fill().is_empty());
        assert_eq!(session.rack().tiles(), ['S']);
    }

    #[test]
    fn test_empty_rack_is_replenished() {
        let mut session = sol_session();
        select(&mut session, 'Q');
        session.attempt_fill(Position::new(1, 2)).unwrap();
        assert_eq!(session.rack().len(), crate::RACK_SIZE);
    }

    #[test]
    fn test_hard_ai_makes_two_to_four_moves() {
        for seed in 0..20 {
            let mut session = session(Difficulty::Hard, seed);
            let open_before = session.open_cell_count();
            let planned = session.pass_turn().unwrap();
            assert!((2..=4).contains(&planned), "seed {seed}: {planned}");
            assert!(session.state().is_ai_turn());

            let moves = session.play_ai_turn();
            assert_eq!(moves.len(), planned.min(open_before));
            assert_eq!(session.open_cell_count(), open_before - moves.len());
            for ai_move in &moves {
                let cell = session.fill().get(ai_move.pos).unwrap();
                assert_eq!(cell.owner, Owner::Ai);
                assert_eq!(Some(cell.letter), session.board().letter_at(ai_move.pos));
            }
            assert!(session.state().is_player_turn());
            assert_eq!(session.rack().len(), crate::RACK_SIZE);
        }
    }

    #[test]
    fn test_ai_turn_blocks_player_actions() {
        let mut session = session(Difficulty::Easy, 3);
        session.pass_turn().unwrap();
        assert_eq!(session.pass_turn(), Err(TurnError::NotPlayerTurn));
        assert_eq!(session.shuffle_rack(), Err(TurnError::NotPlayerTurn));
        assert_eq!(session.solve(), Err(TurnError::NotPlayerTurn));
        assert_eq!(session.select_rack_tile(0), Err(RackError::NotPlayerTurn));
        assert_eq!(
            session.attempt_fill(Position::new(1, 1)),
            Err(IllegalFillError::NotPlayerTurn)
        );

        let ai_move = session.step_ai().unwrap();
        assert_eq!(ai_move.points, 1 + ai_move.completed.iter().map(|c| c.bonus).sum::<i64>());
        assert!(session.state().is_player_turn());
        assert_eq!(session.step_ai(), None);
    }

    #[test]
    fn test_ai_completing_word_gets_bonus() {
        let mut session = sol_session();
        for (col, letter) in [(2, 'S'), (3, 'O')] {
            select(&mut session, letter);
            session.attempt_fill(Position::new(1, col)).unwrap();
        }
        session.pass_turn().unwrap();
        let moves = session.play_ai_turn();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].pos, Position::new(1, 4));
        assert_eq!(moves[0].points, 4);
        assert_eq!(session.scores().side(Owner::Ai).score(), 4);
        assert!(session.state().is_finished());
    }

    #[test]
    fn test_solve_fills_everything_without_points() {
        let mut session = session(Difficulty::Medium, 9);
        let open = session.open_cell_count();
        assert_eq!(session.solve(), Ok(open));
        assert!(session.state().is_finished());
        assert_eq!(session.open_cell_count(), 0);
        assert_eq!(session.fill().count_by(Owner::Player), open);
        assert_eq!(session.scores(), &Scoreboard::new());
    }

    #[test]
    fn test_new_board_keeps_scores() {
        let mut session = session(Difficulty::Easy, 5);
        session.pass_turn().unwrap();
        session.play_ai_turn();
        let scores = *session.scores();
        assert!(scores.side(Owner::Ai).score() > 0);

        session.solve().unwrap();
        session.new_board().unwrap();
        assert!(session.state().is_player_turn());
        assert!(session.fill().is_empty());
        assert_eq!(session.rack().len(), crate::RACK_SIZE);
        assert_eq!(session.scores(), &scores);
    }

    #[test]
    fn test_new_board_waits_for_ai_turn() {
        let mut session = session(Difficulty::Hard, 4);
        assert!(session.pass_turn().unwrap() >= 2);
        session.step_ai().unwrap();
        let state = session.state();
        assert!(state.is_ai_turn());
        let fill = session.fill().clone();

        assert_eq!(session.new_board(), Err(NewBoardError::AiTurnInProgress));
        assert_eq!(session.state(), state);
        assert_eq!(session.fill(), &fill);

        session.play_ai_turn();
        assert!(!session.state().is_ai_turn());
        assert!(session.new_board().is_ok());
        assert!(session.state().is_player_turn());
    }
}
