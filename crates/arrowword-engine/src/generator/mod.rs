//! Arrowword board generation.
//!
//! [`BoardGenerator`] turns a [`Vocabulary`] into a [`Puzzle`]: a fully
//! covered [`Board`] plus the list of [`PlacedWord`]s written onto it.
//!
//! # Algorithm
//!
//! Every attempt starts from an empty board and makes a single pass over the
//! vocabulary in a freshly shuffled order. For each word, every legal
//! `(row, col, direction)` placement is enumerated and scored by the number of
//! letters it shares with words already on the board. One of the `top_k`
//! best-scoring placements is picked at random, so dense boards are preferred
//! without always producing the same layout.
//!
//! A placement is legal when:
//!
//! - the word stays inside the board (and out of row 0 / column 0 when
//!   [`GeneratorConfig::reserve_border`] is set),
//! - the cell before its first letter exists, is not a letter, and has a free
//!   hint slot for the word's direction,
//! - the cell after its last letter is not a letter,
//! - shared letters agree and belong only to perpendicular words,
//! - no newly written letter touches a letter on its perpendicular sides.
//!
//! An attempt that places fewer than [`GeneratorConfig::min_words`] words is
//! discarded. After [`GeneratorConfig::max_attempts`] discarded attempts the
//! generator gives up with [`GenerateError::GenerationFailed`]; callers are
//! expected to retry.
//!
//! # Example
//!
//! ```
//! use arrowword_engine::{BoardGenerator, GeneratorConfig, Vocabulary, VocabularyEntry};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let vocabulary: Vocabulary = [
//!     ("gato", "cat"),
//!     ("toro", "bull"),
//!     ("oso", "bear"),
//!     ("sol", "sun"),
//!     ("luna", "moon"),
//!     ("mar", "sea"),
//! ]
//! .into_iter()
//! .map(|(word, hint)| VocabularyEntry::new(word, hint))
//! .collect();
//!
//! let generator = BoardGenerator::new(GeneratorConfig {
//!     min_words: 4,
//!     ..GeneratorConfig::default()
//! });
//! let mut rng = Pcg32::seed_from_u64(7);
//! let puzzle = generator.generate(&vocabulary, &mut rng).unwrap();
//!
//! assert!(puzzle.words().len() >= 4);
//! assert!(puzzle.board().is_fully_covered());
//! ```

use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::{
    GenerateError,
    core::{Board, DEFAULT_MAX_WORD_LEN, MIN_WORD_LEN, PlacedWord, Position, Vocabulary},
};

use self::workspace::Workspace;

pub use self::verify::InvariantViolation;

mod verify;
mod workspace;

/// Tuning knobs for [`BoardGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Attempts placing fewer words than this are discarded.
    pub min_words: usize,
    /// Attempts per [`BoardGenerator::generate`] call.
    pub max_attempts: usize,
    /// Number of best-scoring placements to choose from.
    pub top_k: usize,
    /// Keep row 0 and column 0 free of letters (clue cells and fillers only).
    pub reserve_border: bool,
    /// Longest word the generator places; longer vocabulary words are skipped.
    pub max_word_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 8,
            min_words: 5,
            max_attempts: 20,
            top_k: 3,
            reserve_border: true,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

/// A generated board and the words written onto it.
///
/// Once generated, a puzzle is never modified: game sessions keep their
/// progress in a separate overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    board: Board,
    words: Vec<PlacedWord>,
}

impl Puzzle {
    pub(crate) fn new(board: Board, words: Vec<PlacedWord>) -> Self {
        Self { board, words }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Words with a letter at `pos` (at most one per direction).
    pub fn words_at(&self, pos: Position) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.words.iter().filter(move |word| word.covers(pos))
    }

    /// Fraction of cells holding a letter.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        let total = self.board.rows() * self.board.cols();
        if total == 0 {
            return 0.0;
        }
        self.board.letter_positions().count() as f64 / total as f64
    }
}

/// Builds arrowword puzzles from a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle, drawing all randomness from `rng`.
    ///
    /// The same vocabulary, configuration and RNG state always produce the
    /// same puzzle.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(rows = self.config.rows, cols = self.config.cols, words = vocabulary.len()),
    )]
    pub fn generate<R>(&self, vocabulary: &Vocabulary, rng: &mut R) -> Result<Puzzle, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let GeneratorConfig {
            rows,
            cols,
            min_words,
            max_attempts,
            reserve_border,
            max_word_len,
            ..
        } = self.config;

        let entries: Vec<_> = vocabulary
            .words()
            .iter()
            .map(|word| (word, word.normalized.chars().collect::<Vec<_>>()))
            .filter(|(_, chars)| chars.len() <= max_word_len)
            .collect();
        if entries.is_empty() {
            return Err(GenerateError::EmptyVocabulary);
        }
        // The reserved border takes a full row and column.
        let min_side = if reserve_border { 2 } else { 1 };
        if rows.min(cols) < min_side || rows.max(cols) <= MIN_WORD_LEN {
            return Err(GenerateError::InvalidDimensions { rows, cols });
        }
        let mut order: Vec<usize> = (0..entries.len()).collect();
        let mut best_word_count = 0;

        for attempt in 1..=max_attempts {
            order.shuffle(rng);
            let mut workspace = Workspace::new(&self.config);
            for &index in &order {
                let (word, chars) = &entries[index];
                workspace.place_best(word, chars, rng);
            }

            let placed = workspace.word_count();
            if placed >= min_words {
                let puzzle = workspace.finish();
                debug_assert_eq!(puzzle.verify(&self.config), Ok(()));
                tracing::debug!(attempt, placed, "generated board");
                return Ok(puzzle);
            }
            best_word_count = best_word_count.max(placed);
            tracing::debug!(attempt, placed, min_words, "discarding sparse board");
        }

        tracing::warn!(max_attempts, best_word_count, min_words, "board generation failed");
        Err(GenerateError::GenerationFailed {
            attempts: max_attempts,
            best_word_count,
        })
    }
}
