use std::fmt;

use serde::{Deserialize, Serialize};

/// Orientation of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Word reads left to right; its clue sits in the cell to the left.
    Horizontal,
    /// Word reads top to bottom; its clue sits in the cell above.
    Vertical,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the `(row, col)` unit step along this direction.
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

/// Zero-based cell coordinate on a [`Board`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves `n` cells forward along `direction`.
    ///
    /// The result may lie outside the board; callers check bounds.
    #[must_use]
    pub const fn advanced(self, direction: Direction, n: usize) -> Self {
        let (dr, dc) = direction.step();
        Self {
            row: self.row + dr * n,
            col: self.col + dc * n,
        }
    }

    /// Returns the cell one step back along `direction`, if it exists.
    ///
    /// For the first letter of a word this is the word's clue cell.
    #[must_use]
    pub const fn preceding(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Horizontal if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Vertical if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            _ => None,
        }
    }
}

/// Clue texts held by a clue cell, one slot per direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueHints {
    /// Hint for the word starting immediately to the right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Hint for the word starting immediately below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<String>,
}

impl ClueHints {
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Horizontal => self.right.as_deref(),
            Direction::Vertical => self.down.as_deref(),
        }
    }

    /// Stores a hint in the slot for `direction`.
    ///
    /// Returns `false` without modifying anything if the slot is already taken.
    pub fn insert(&mut self, direction: Direction, hint: impl Into<String>) -> bool {
        let slot = match direction {
            Direction::Horizontal => &mut self.right,
            Direction::Vertical => &mut self.down,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(hint.into());
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right.is_none() && self.down.is_none()
    }
}

/// A single board cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    /// Not yet assigned. Only exists while a board is being generated.
    #[default]
    Empty,
    /// One character of one or more crossing words.
    Letter { letter: char },
    /// Clue text for the word(s) starting right of / below this cell.
    Clue(ClueHints),
    /// Dead cell with no gameplay role.
    Filler,
}

impl Cell {
    #[must_use]
    pub const fn letter(letter: char) -> Self {
        Self::Letter { letter }
    }

    /// Returns the character if this is a letter cell.
    #[must_use]
    pub const fn as_letter(&self) -> Option<char> {
        match self {
            Self::Letter { letter } => Some(*letter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_clue(&self) -> Option<&ClueHints> {
        match self {
            Self::Clue(hints) => Some(hints),
            _ => None,
        }
    }
}

/// Row-major `rows × cols` grid of [`Cell`]s.
///
/// The generator owns and mutates a board while building a puzzle; afterwards
/// it is shared read-only with the game session and the opponent.
///
/// # Example
///
/// ```
/// use arrowword_engine::{Board, Cell, Position};
///
/// let mut board = Board::new(3, 4);
/// board.set(Position::new(1, 2), Cell::letter('A'));
///
/// assert_eq!(board.get(Position::new(1, 2)), Some(&Cell::letter('A')));
/// assert_eq!(board.get(Position::new(3, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell [`Cell::Empty`].
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Returns the letter at `pos`, or `None` if out of bounds or not a letter cell.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.get(pos).and_then(Cell::as_letter)
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let index = self
            .index(pos)
            .unwrap_or_else(|| panic!("position {pos} is outside a {}x{} board", self.rows, self.cols));
        self.cells[index] = cell;
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterates over every cell together with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / cols, i % cols), cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Positions of every letter cell, row by row.
    pub fn letter_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_letter())
            .map(|(pos, _)| pos)
    }

    /// Returns `true` if no cell is [`Cell::Empty`].
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }
}

impl fmt::Display for Board {
    /// Plain-text rendering: letters as themselves, clues as `>`, `v` or `+`,
    /// fillers as `#` and empty cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Letter { letter } => *letter,
                    Cell::Clue(hints) => match (hints.right.is_some(), hints.down.is_some()) {
                        (true, true) => '+',
                        (true, false) => '>',
                        (false, true) => 'v',
                        (false, false) => '#',
                    },
                    Cell::Filler => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preceding_cell() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.preceding(Direction::Horizontal), Some(Position::new(2, 2)));
        assert_eq!(pos.preceding(Direction::Vertical), Some(Position::new(1, 3)));
        assert_eq!(Position::new(0, 3).preceding(Direction::Vertical), None);
        assert_eq!(Position::new(4, 0).preceding(Direction::Horizontal), None);
    }

    #[test]
    fn test_advanced() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.advanced(Direction::Horizontal, 3), Position::new(1, 4));
        assert_eq!(pos.advanced(Direction::Vertical, 2), Position::new(3, 1));
    }

    #[test]
    fn test_clue_hints_slots_are_independent() {
        let mut hints = ClueHints::default();
        assert!(hints.is_empty());
        assert!(hints.insert(Direction::Horizontal, "cat"));
        assert!(hints.insert(Direction::Vertical, "sun"));
        assert!(!hints.insert(Direction::Horizontal, "bull"));
        assert_eq!(hints.get(Direction::Horizontal), Some("cat"));
        assert_eq!(hints.get(Direction::Vertical), Some("sun"));
    }

    #[test]
    fn test_board_bounds() {
        let mut board = Board::new(2, 3);
        assert!(!board.is_fully_covered());
        assert!(board.contains(Position::new(1, 2)));
        assert!(!board.contains(Position::new(2, 0)));
        assert!(board.get_mut(Position::new(0, 3)).is_none());

        for cell in board.cells_mut() {
            *cell = Cell::Filler;
        }
        board.set(Position::new(0, 1), Cell::letter('Q'));
        assert!(board.is_fully_covered());
        assert_eq!(board.letter_positions().collect::<Vec<_>>(), [Position::new(0, 1)]);
        assert_eq!(board.to_string(), "#Q#\n###\n");
    }

    #[test]
    fn test_cell_serialization() {
        let cell = Cell::Clue(ClueHints {
            right: Some("cat".into()),
            down: None,
        });
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"type":"clue","right":"cat"}"#);
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);

        let json = serde_json::to_string(&Cell::letter('A')).unwrap();
        assert_eq!(json, r#"{"type":"letter","letter":"A"}"#);
    }
}
