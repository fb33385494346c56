use std::collections::HashSet;

use crate::core::{Cell, Direction, Position};

use super::{GeneratorConfig, Puzzle};

/// A structural rule broken by a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantViolation {
    #[display("cell {_0} was never assigned")]
    Uncovered(#[error(not(source))] Position),
    #[display("letter at {_0} lies on the reserved border")]
    LetterOnBorder(#[error(not(source))] Position),
    #[display("word {word} leaves the board")]
    WordOutOfBounds { word: String },
    #[display("word {word} expects {expected:?} at {pos}")]
    LetterMismatch {
        word: String,
        pos: Position,
        expected: char,
    },
    #[display("word {word} has no clue cell for its hint")]
    MissingClue { word: String },
    #[display("clue cell {pos} serves two {direction:?} words")]
    SharedClueSlot { pos: Position, direction: Direction },
    #[display("only {placed} words placed, {required} required")]
    TooFewWords { placed: usize, required: usize },
}

impl Puzzle {
    /// Checks every structural rule a generated puzzle must satisfy.
    ///
    /// Crossing words agree on their shared letter because each word is
    /// checked against the single character stored on the board.
    pub fn verify(&self, config: &GeneratorConfig) -> Result<(), InvariantViolation> {
        let board = &self.board;

        if self.words.len() < config.min_words {
            return Err(InvariantViolation::TooFewWords {
                placed: self.words.len(),
                required: config.min_words,
            });
        }

        for (pos, cell) in board.cells() {
            if cell.is_empty() {
                return Err(InvariantViolation::Uncovered(pos));
            }
            if config.reserve_border && cell.is_letter() && (pos.row == 0 || pos.col == 0) {
                return Err(InvariantViolation::LetterOnBorder(pos));
            }
        }

        let mut clue_slots = HashSet::new();
        for word in &self.words {
            for (pos, expected) in word.letters() {
                match board.get(pos) {
                    None => {
                        return Err(InvariantViolation::WordOutOfBounds {
                            word: word.text.clone(),
                        });
                    }
                    Some(cell) if cell.as_letter() != Some(expected) => {
                        return Err(InvariantViolation::LetterMismatch {
                            word: word.text.clone(),
                            pos,
                            expected,
                        });
                    }
                    Some(_) => {}
                }
            }

            let clue = word
                .clue_position()
                .and_then(|pos| board.get(pos).map(|cell| (pos, cell)));
            let Some((clue_pos, Cell::Clue(hints))) = clue else {
                return Err(InvariantViolation::MissingClue {
                    word: word.text.clone(),
                });
            };
            if hints.get(word.direction) != Some(word.hint.as_str()) {
                return Err(InvariantViolation::MissingClue {
                    word: word.text.clone(),
                });
            }
            if !clue_slots.insert((clue_pos, word.direction)) {
                return Err(InvariantViolation::SharedClueSlot {
                    pos: clue_pos,
                    direction: word.direction,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ClueHints, PlacedWord};

    fn sol_puzzle() -> Puzzle {
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
        Puzzle {
            board,
            words: vec![PlacedWord {
                text: "SOL".into(),
                display: "sol".into(),
                hint: "sun".into(),
                start: Position::new(1, 2),
                direction: Direction::Horizontal,
            }],
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            rows: 3,
            cols: 5,
            min_words: 1,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_valid_puzzle() {
        assert_eq!(sol_puzzle().verify(&config()), Ok(()));
    }

    #[test]
    fn test_detects_uncovered_cell() {
        let mut puzzle = sol_puzzle();
        puzzle.board.set(Position::new(2, 4), Cell::Empty);
        assert_eq!(
            puzzle.verify(&config()),
            Err(InvariantViolation::Uncovered(Position::new(2, 4)))
        );
    }

    #[test]
    fn test_detects_border_letter() {
        let mut puzzle = sol_puzzle();
        puzzle.board.set(Position::new(0, 3), Cell::letter('X'));
        assert_eq!(
            puzzle.verify(&config()),
            Err(InvariantViolation::LetterOnBorder(Position::new(0, 3)))
        );
        let relaxed = GeneratorConfig {
            reserve_border: false,
            ..config()
        };
        assert_eq!(puzzle.verify(&relaxed), Ok(()));
    }

    #[test]
    fn test_detects_mismatch_and_missing_clue() {
        let mut puzzle = sol_puzzle();
        puzzle.board.set(Position::new(1, 3), Cell::letter('A'));
        assert!(matches!(
            puzzle.verify(&config()),
            Err(InvariantViolation::LetterMismatch { expected: 'O', .. })
        ));

        let mut puzzle = sol_puzzle();
        puzzle.board.set(Position::new(1, 1), Cell::Filler);
        assert!(matches!(
            puzzle.verify(&config()),
            Err(InvariantViolation::MissingClue { .. })
        ));
    }

    #[test]
    fn test_detects_too_few_words() {
        let strict = GeneratorConfig {
            min_words: 2,
            ..config()
        };
        assert_eq!(
            sol_puzzle().verify(&strict),
            Err(InvariantViolation::TooFewWords {
                placed: 1,
                required: 2
            })
        );
    }
}
