use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Who filled a letter cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    Player,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledCell {
    pub letter: char,
    pub owner: Owner,
}

/// Sparse record of which letter cells have been filled, and by whom.
///
/// Kept apart from the generated board, which stays untouched during play.
/// Entries are only ever added; a new board starts with a new fill state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillState {
    cells: BTreeMap<Position, FilledCell>,
}

impl FillState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&FilledCell> {
        self.cells.get(&pos)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Records a filled cell. Returns `false` if the cell was already filled.
    pub fn insert(&mut self, pos: Position, cell: FilledCell) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.cells.insert(pos, cell);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &FilledCell)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Number of cells filled by `owner`.
    #[must_use]
    pub fn count_by(&self, owner: Owner) -> usize {
        self.cells.values().filter(|cell| cell.owner == owner).count()
    }
}
