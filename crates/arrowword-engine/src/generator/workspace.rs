use std::cmp::Reverse;

use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};

use crate::core::{Board, Cell, ClueHints, Direction, PlacedWord, Position, VocabularyWord};

use super::{GeneratorConfig, Puzzle};

/// A legal spot for a word together with how many existing letters it reuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Candidate {
    pub start: Position,
    pub direction: Direction,
    pub crossings: usize,
}

const fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::Horizontal => 0b01,
        Direction::Vertical => 0b10,
    }
}

/// Board under construction for a single generation attempt.
///
/// Besides the cells it tracks, for every letter, which directions already
/// run through it so a new word can only share a letter with perpendicular
/// words.
#[derive(Debug, Clone)]
pub(super) struct Workspace<'a> {
    config: &'a GeneratorConfig,
    board: Board,
    occupancy: Vec<u8>,
    words: Vec<PlacedWord>,
}

impl<'a> Workspace<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            board: Board::new(config.rows, config.cols),
            occupancy: vec![0; config.rows * config.cols],
            words: vec![],
        }
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn occupancy(&self, pos: Position) -> u8 {
        self.occupancy[pos.row * self.config.cols + pos.col]
    }

    /// First row/column that may hold letters.
    fn margin(&self) -> usize {
        usize::from(self.config.reserve_border)
    }

    /// Enumerates every legal placement of `word` across the board.
    pub fn candidates(&self, word: &[char]) -> Vec<Candidate> {
        let len = word.len();
        let (rows, cols) = (self.config.rows, self.config.cols);
        let margin = self.margin();
        let mut candidates = vec![];
        for direction in Direction::ALL {
            // The clue cell precedes the first letter, so a word never starts
            // on the leading edge of its own direction.
            let (row_range, col_range) = match direction {
                Direction::Horizontal => (margin..rows, margin.max(1)..(cols + 1).saturating_sub(len)),
                Direction::Vertical => (margin.max(1)..(rows + 1).saturating_sub(len), margin..cols),
            };
            for row in row_range {
                for col in col_range.clone() {
                    let start = Position::new(row, col);
                    if let Some(crossings) = self.check(word, start, direction) {
                        candidates.push(Candidate {
                            start,
                            direction,
                            crossings,
                        });
                    }
                }
            }
        }
        candidates
    }

    /// Returns the number of shared letters if `word` may be written at `start`.
    fn check(&self, word: &[char], start: Position, direction: Direction) -> Option<usize> {
        let len = word.len();

        let clue_pos = start.preceding(direction)?;
        match self.board.get(clue_pos)? {
            Cell::Empty => {}
            Cell::Clue(hints) if hints.get(direction).is_none() => {}
            _ => return None,
        }

        // A word must not run straight into another letter.
        if self.board.letter_at(start.advanced(direction, len)).is_some() {
            return None;
        }

        let bit = direction_bit(direction);
        let across = direction.perpendicular();
        let mut crossings = 0;
        for (i, &ch) in word.iter().enumerate() {
            let pos = start.advanced(direction, i);
            match self.board.get(pos)? {
                Cell::Letter { letter } => {
                    if *letter != ch || self.occupancy(pos) & bit != 0 {
                        return None;
                    }
                    crossings += 1;
                }
                Cell::Empty => {
                    if self.has_letter_beside(pos, across) {
                        return None;
                    }
                }
                Cell::Clue(_) | Cell::Filler => return None,
            }
        }

        (crossings < len).then_some(crossings)
    }

    fn has_letter_beside(&self, pos: Position, across: Direction) -> bool {
        [pos.preceding(across), Some(pos.advanced(across, 1))]
            .into_iter()
            .flatten()
            .any(|neighbor| self.board.letter_at(neighbor).is_some())
    }

    /// Places `word` at one of its best-scoring candidates.
    ///
    /// Candidates are shuffled and then stably sorted by crossings, and the
    /// pick is uniform among the first `top_k`. Returns `false` when the word
    /// fits nowhere.
    pub fn place_best<R>(&mut self, word: &VocabularyWord, chars: &[char], rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        let mut candidates = self.candidates(chars);
        candidates.shuffle(rng);
        candidates.sort_by_key(|candidate| Reverse(candidate.crossings));
        let top = self.config.top_k.max(1).min(candidates.len());
        let Some(&choice) = candidates[..top].choose(rng) else {
            return false;
        };
        self.place(word, chars, choice);
        true
    }

    pub fn place(&mut self, word: &VocabularyWord, chars: &[char], candidate: Candidate) {
        let Candidate {
            start, direction, ..
        } = candidate;

        if let Some(clue_pos) = start.preceding(direction)
            && let Some(cell) = self.board.get_mut(clue_pos)
        {
            if !cell.is_clue() {
                *cell = Cell::Clue(ClueHints::default());
            }
            if let Cell::Clue(hints) = cell {
                let inserted = hints.insert(direction, word.hint.clone());
                debug_assert!(inserted, "clue slot at {clue_pos} already taken");
            }
        }

        let bit = direction_bit(direction);
        for (i, &ch) in chars.iter().enumerate() {
            let pos = start.advanced(direction, i);
            self.board.set(pos, Cell::letter(ch));
            self.occupancy[pos.row * self.config.cols + pos.col] |= bit;
        }

        self.words.push(PlacedWord {
            text: word.normalized.clone(),
            display: word.display.clone(),
            hint: word.hint.clone(),
            start,
            direction,
        });
    }

    /// Turns every undecided cell into filler and hands out the puzzle.
    pub fn finish(self) -> Puzzle {
        let Self {
            mut board, words, ..
        } = self;
        for cell in board.cells_mut() {
            let dead = match cell {
                Cell::Empty => true,
                Cell::Clue(hints) => hints.is_empty(),
                Cell::Letter { .. } | Cell::Filler => false,
            };
            if dead {
                *cell = Cell::Filler;
            }
        }
        Puzzle::new(board, words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_word(text: &str, hint: &str) -> VocabularyWord {
        VocabularyWord {
            display: text.to_lowercase(),
            normalized: text.into(),
            hint: hint.into(),
        }
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn place(ws: &mut Workspace<'_>, text: &str, row: usize, col: usize, direction: Direction) {
        let start = Position::new(row, col);
        let crossings = ws
            .check(&chars(text), start, direction)
            .unwrap_or_else(|| panic!("{text} should fit at {start}"));
        ws.place(
            &vocab_word(text, &text.to_lowercase()),
            &chars(text),
            Candidate {
                start,
                direction,
                crossings,
            },
        );
    }

    #[test]
    fn test_border_is_reserved() {
        let config = GeneratorConfig::default();
        let ws = Workspace::new(&config);
        let candidates = ws.candidates(&chars("GATO"));
        assert!(!candidates.is_empty());
        for candidate in candidates {
            assert!(candidate.start.row >= 1 && candidate.start.col >= 1);
            assert_eq!(candidate.crossings, 0);
        }
    }

    #[test]
    fn test_unreserved_border_allows_edge_letters() {
        let config = GeneratorConfig {
            reserve_border: false,
            ..GeneratorConfig::default()
        };
        let ws = Workspace::new(&config);
        let candidates = ws.candidates(&chars("SOL"));
        assert!(candidates.iter().any(|c| c.start.row == 0));
        assert!(candidates.iter().any(|c| c.start.col == 0));
        // Clue cells still have to fit on the board.
        assert!(candidates.iter().all(|c| c.start.preceding(c.direction).is_some()));
    }

    #[test]
    fn test_word_longer_than_board_has_no_candidates() {
        let config = GeneratorConfig {
            rows: 4,
            cols: 4,
            ..GeneratorConfig::default()
        };
        let ws = Workspace::new(&config);
        assert!(ws.candidates(&chars("GATO")).is_empty());
        assert!(!ws.candidates(&chars("SOL")).is_empty());
    }

    #[test]
    fn test_crossing_must_agree() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "GATO", 2, 2, Direction::Horizontal);

        // TORO shares the T of GATO at (2, 4).
        assert_eq!(ws.check(&chars("TORO"), Position::new(2, 4), Direction::Vertical), Some(1));
        // MAR would put an M on the T.
        assert_eq!(ws.check(&chars("MAR"), Position::new(2, 4), Direction::Vertical), None);
    }

    #[test]
    fn test_parallel_overlap_rejected() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "TORO", 3, 1, Direction::Horizontal);
        // Words sharing a run of letters in the same direction never fit.
        assert_eq!(ws.check(&chars("ORO"), Position::new(3, 2), Direction::Horizontal), None);
        assert_eq!(ws.check(&chars("TOR"), Position::new(3, 1), Direction::Horizontal), None);
    }

    #[test]
    fn test_adjacent_parallel_word_rejected() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "SOL", 3, 2, Direction::Horizontal);

        // Directly below SOL without crossing.
        assert_eq!(ws.check(&chars("MAR"), Position::new(4, 2), Direction::Horizontal), None);
        // Directly above SOL without crossing.
        assert_eq!(ws.check(&chars("MAR"), Position::new(2, 3), Direction::Horizontal), None);
        // Two rows below is clean.
        assert_eq!(ws.check(&chars("MAR"), Position::new(5, 2), Direction::Horizontal), Some(0));
    }

    #[test]
    fn test_word_may_not_touch_following_letter() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "LUNA", 5, 4, Direction::Vertical);

        // OSO ending right above the L at (5, 4).
        assert_eq!(ws.check(&chars("OSO"), Position::new(2, 4), Direction::Vertical), None);
        // OSO ending right before the L in the same row.
        assert_eq!(ws.check(&chars("OSO"), Position::new(5, 1), Direction::Horizontal), None);
        // One cell further left leaves a gap.
        assert_eq!(ws.check(&chars("OS"), Position::new(5, 1), Direction::Horizontal), Some(0));
    }

    #[test]
    fn test_letters_never_cover_clue_cells() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "SOL", 2, 2, Direction::Horizontal);

        // TORO down column 1 would pass through SOL's clue cell at (2, 1).
        assert_eq!(ws.check(&chars("TORO"), Position::new(1, 1), Direction::Vertical), None);
        // The clue of a word cannot sit on a letter either.
        assert_eq!(ws.check(&chars("OSO"), Position::new(2, 3), Direction::Horizontal), None);
    }

    #[test]
    fn test_clue_cell_serves_both_directions() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "SOL", 2, 2, Direction::Horizontal);

        // MAR starting at (3, 1) uses the clue cell (2, 1) that already holds
        // the "right" hint of SOL.
        assert_eq!(ws.check(&chars("MAR"), Position::new(3, 1), Direction::Vertical), Some(0));
        place(&mut ws, "MAR", 3, 1, Direction::Vertical);
        let hints = ws.board().get(Position::new(2, 1)).and_then(Cell::as_clue).cloned();
        assert_eq!(
            hints,
            Some(ClueHints {
                right: Some("sol".into()),
                down: Some("mar".into()),
            })
        );

        // The "right" slot is taken.
        let mut other = Workspace::new(&config);
        place(&mut other, "SOL", 2, 2, Direction::Horizontal);
        assert!(other.check(&chars("SOL"), Position::new(2, 2), Direction::Horizontal).is_none());
    }

    #[test]
    fn test_finish_fills_every_undecided_cell() {
        let config = GeneratorConfig::default();
        let mut ws = Workspace::new(&config);
        place(&mut ws, "GATO", 1, 1, Direction::Horizontal);
        let puzzle = ws.finish();
        assert!(puzzle.board().is_fully_covered());
        let letters = puzzle.board().letter_positions().count();
        assert_eq!(letters, 4);
        assert!(matches!(puzzle.board().get(Position::new(1, 0)), Some(Cell::Clue(_))));
        assert_eq!(puzzle.board().get(Position::new(0, 0)), Some(&Cell::Filler));
    }
}
