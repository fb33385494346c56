use std::{fmt, time::Duration};

use rand::{Rng as _, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Pause before the AI's first move of a turn.
pub const FIRST_MOVE_DELAY: Duration = Duration::from_millis(1000);

/// Pause between consecutive AI moves.
pub const MOVE_INTERVAL: Duration = Duration::from_millis(800);

/// How many cells the AI fills per turn.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// One move per turn.
    #[display("Easy")]
    Easy,
    /// Two moves 60% of the time, otherwise one.
    #[default]
    #[display("Medium")]
    Medium,
    /// Two to four moves.
    #[display("Hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

/// Move policy of the computer side.
///
/// The opponent never sees the board: it is handed the open cells and always
/// writes the correct letter into the one it picks.
pub trait Opponent: fmt::Debug {
    /// Number of moves to make this turn.
    fn plan_moves(&mut self, rng: &mut dyn RngCore) -> usize;

    /// Picks one of `open` to fill, returning its index.
    fn choose_cell(&mut self, open: &[Position], rng: &mut dyn RngCore) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomOpponent {
    difficulty: Difficulty,
}

impl RandomOpponent {
    /// Probability that a medium opponent makes two moves.
    const MEDIUM_DOUBLE_MOVE: f64 = 0.6;

    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Opponent for RandomOpponent {
    fn plan_moves(&mut self, rng: &mut dyn RngCore) -> usize {
        match self.difficulty {
            Difficulty::Easy => 1,
            Difficulty::Medium => {
                if rng.random_bool(Self::MEDIUM_DOUBLE_MOVE) {
                    2
                } else {
                    1
                }
            }
            Difficulty::Hard => rng.random_range(2..=4),
        }
    }

    fn choose_cell(&mut self, open: &[Position], rng: &mut dyn RngCore) -> Option<usize> {
        (!open.is_empty()).then(|| rng.random_range(0..open.len()))
    }
}
