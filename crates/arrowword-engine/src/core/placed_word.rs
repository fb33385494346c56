use serde::{Deserialize, Serialize};

use super::board::{Direction, Position};

/// A word written onto a generated board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// Normalized text as written on the board.
    pub text: String,
    /// Original spelling from the vocabulary.
    pub display: String,
    pub hint: String,
    pub start: Position,
    pub direction: Direction,
}

impl PlacedWord {
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The cell holding this word's hint.
    ///
    /// `None` only for a word starting on the leading edge, which the
    /// generator never produces.
    #[must_use]
    pub fn clue_position(&self) -> Option<Position> {
        self.start.preceding(self.direction)
    }

    /// Positions of the word's letters paired with the expected characters.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.text
            .chars()
            .enumerate()
            .map(|(i, ch)| (self.start.advanced(self.direction, i), ch))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.letters().map(|(pos, _)| pos)
    }

    /// Returns `true` if one of the word's letters lies at `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        let Position { row, col } = self.start;
        let len = self.len();
        match self.direction {
            Direction::Horizontal => pos.row == row && (col..col + len).contains(&pos.col),
            Direction::Vertical => pos.col == col && (row..row + len).contains(&pos.row),
        }
    }
}
