use arrayvec::ArrayVec;
use rand::{Rng, seq::SliceRandom as _};

use crate::RackError;

/// Number of tiles a full rack holds.
pub const RACK_SIZE: usize = 5;

/// Letters a random tile is drawn from: the 26 Latin letters plus `Ñ`.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Chance that a refill draws a letter still missing from the board.
pub const NEEDED_LETTER_PROBABILITY: f64 = 0.7;

/// The player's hand of letter tiles.
///
/// # Refill Policy
///
/// Each missing tile is drawn, with probability [`NEEDED_LETTER_PROBABILITY`],
/// from the letters of the board's still-open cells (a letter needed by two
/// open cells is twice as likely). Otherwise, or when nothing is needed, it is
/// a uniform pick from [`ALPHABET`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: ArrayVec<char, RACK_SIZE>,
    selected: Option<usize>,
}

impl Rack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rack holding the given tiles, keeping at most [`RACK_SIZE`].
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = char>) -> Self {
        Self {
            tiles: tiles.into_iter().take(RACK_SIZE).collect(),
            selected: None,
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_tile(&self) -> Option<char> {
        self.selected.map(|index| self.tiles[index])
    }

    /// Selects the tile at `index`, or deselects it if it was already selected.
    ///
    /// Returns the selection after the toggle.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, RackError> {
        if index >= self.tiles.len() {
            return Err(RackError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            });
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.selected)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Removes and returns the selected tile.
    pub fn take_selected(&mut self) -> Option<char> {
        let index = self.selected.take()?;
        Some(self.tiles.remove(index))
    }

    /// Reorders the tiles. The selection is cleared.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.selected = None;
        self.tiles.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.selected = None;
    }

    /// Tops the rack up to [`RACK_SIZE`] tiles.
    ///
    /// `needed` lists the letters of every open board cell, duplicates included.
    pub fn replenish<R>(&mut self, needed: &[char], rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        while !self.tiles.is_full() {
            let use_needed = !needed.is_empty() && rng.random_bool(NEEDED_LETTER_PROBABILITY);
            let letter = if use_needed {
                needed[rng.random_range(0..needed.len())]
            } else {
                ALPHABET[rng.random_range(0..ALPHABET.len())]
            };
            self.tiles.push(letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn full_rack(seed: u64, needed: &[char]) -> Rack {
        let mut rack = Rack::new();
        rack.replenish(needed, &mut Pcg32::seed_from_u64(seed));
        rack
    }

    #[test]
    fn test_replenish_fills_to_capacity() {
        let rack = full_rack(0, &[]);
        assert_eq!(rack.len(), RACK_SIZE);
        assert!(rack.tiles().iter().all(|t| ALPHABET.contains(t)));
    }

    #[test]
    fn test_replenish_prefers_needed_letters() {
        let mut needed_hits = 0;
        let mut total = 0;
        for seed in 0..200 {
            let rack = full_rack(seed, &['Q']);
            needed_hits += rack.tiles().iter().filter(|&&t| t == 'Q').count();
            total += rack.len();
        }
        // 70% from the needed list plus the occasional uniform Q.
        let ratio = f64::from(u32::try_from(needed_hits).unwrap())
            / f64::from(u32::try_from(total).unwrap());
        assert!((0.6..0.8).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_replenish_keeps_existing_tiles() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut rack = Rack::new();
        rack.replenish(&['A'], &mut rng);
        let first = rack.tiles()[0];
        rack.toggle(4).unwrap();
        rack.take_selected();
        assert_eq!(rack.len(), RACK_SIZE - 1);
        rack.replenish(&['A'], &mut rng);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(rack.tiles()[0], first);
    }

    #[test]
    fn test_from_tiles_truncates() {
        let rack = Rack::from_tiles("ABCDEFG".chars());
        assert_eq!(rack.tiles(), ['A', 'B', 'C', 'D', 'E']);
        assert_eq!(rack.selected(), None);
    }

    #[test]
    fn test_toggle_selection() {
        let mut rack = full_rack(1, &[]);
        assert_eq!(rack.toggle(2), Ok(Some(2)));
        assert_eq!(rack.selected_tile(), Some(rack.tiles()[2]));
        assert_eq!(rack.toggle(3), Ok(Some(3)));
        assert_eq!(rack.toggle(3), Ok(None));
        assert_eq!(
            rack.toggle(5),
            Err(RackError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_take_selected_consumes_tile() {
        let mut rack = full_rack(2, &[]);
        assert_eq!(rack.take_selected(), None);
        let tiles = rack.tiles().to_vec();
        rack.toggle(1).unwrap();
        assert_eq!(rack.take_selected(), Some(tiles[1]));
        assert_eq!(rack.selected(), None);
        assert_eq!(rack.tiles(), [tiles[0], tiles[2], tiles[3], tiles[4]]);
    }

    #[test]
    fn test_shuffle_keeps_tiles_and_clears_selection() {
        let mut rack = full_rack(4, &[]);
        let mut before = rack.tiles().to_vec();
        rack.toggle(0).unwrap();
        rack.shuffle(&mut Pcg32::seed_from_u64(9));
        assert_eq!(rack.selected(), None);
        let mut after = rack.tiles().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
