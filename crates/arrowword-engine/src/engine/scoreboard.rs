use serde::{Deserialize, Serialize};

use super::fill_state::Owner;

/// Points for a correct letter.
pub const CORRECT_POINTS: i64 = 1;

/// Points lost for a wrong letter. Only the player can lose points.
pub const MISS_PENALTY: i64 = 1;

/// Running totals for one side of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    score: i64,
    correct: usize,
    misses: usize,
    words_completed: usize,
}

impl SideStats {
    /// Current score. Can drop below zero.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub const fn words_completed(&self) -> usize {
        self.words_completed
    }
}

/// Scores of the player and the AI.
///
/// Scores carry over from board to board; only [`Scoreboard::reset`] clears
/// them.
///
/// # Scoring
///
/// - A correct letter is worth [`CORRECT_POINTS`]
/// - A wrong letter costs [`MISS_PENALTY`]
/// - Completing a word adds a bonus equal to the word's length, once per word
///
/// # Example
///
/// ```
/// use arrowword_engine::{Owner, Scoreboard};
///
/// let mut scores = Scoreboard::new();
/// scores.record_correct(Owner::Player);
/// scores.record_word(Owner::Player, 3);
/// scores.record_miss(Owner::Player);
///
/// assert_eq!(scores.side(Owner::Player).score(), 3);
/// assert_eq!(scores.leader(), Some(Owner::Player));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    player: SideStats,
    ai: SideStats,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn side(&self, owner: Owner) -> &SideStats {
        match owner {
            Owner::Player => &self.player,
            Owner::Ai => &self.ai,
        }
    }

    const fn side_mut(&mut self, owner: Owner) -> &mut SideStats {
        match owner {
            Owner::Player => &mut self.player,
            Owner::Ai => &mut self.ai,
        }
    }

    /// Credits a correct letter and returns the points awarded.
    pub const fn record_correct(&mut self, owner: Owner) -> i64 {
        let side = self.side_mut(owner);
        side.correct += 1;
        side.score += CORRECT_POINTS;
        CORRECT_POINTS
    }

    /// Charges a wrong letter and returns the points lost.
    pub const fn record_miss(&mut self, owner: Owner) -> i64 {
        let side = self.side_mut(owner);
        side.misses += 1;
        side.score -= MISS_PENALTY;
        MISS_PENALTY
    }

    /// Credits a completed word of `len` letters and returns the bonus.
    pub fn record_word(&mut self, owner: Owner, len: usize) -> i64 {
        let bonus = i64::try_from(len).unwrap_or(i64::MAX);
        let side = self.side_mut(owner);
        side.words_completed += 1;
        side.score = side.score.saturating_add(bonus);
        bonus
    }

    /// The side with the higher score, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Owner> {
        match self.player.score.cmp(&self.ai.score) {
            std::cmp::Ordering::Greater => Some(Owner::Player),
            std::cmp::Ordering::Less => Some(Owner::Ai),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_score_can_go_negative() {
        let mut scores = Scoreboard::new();
        assert_eq!(scores.record_miss(Owner::Player), MISS_PENALTY);
        scores.record_miss(Owner::Player);
        let player = scores.side(Owner::Player);
        assert_eq!(player.score(), -2);
        assert_eq!(player.misses(), 2);
        assert_eq!(scores.leader(), Some(Owner::Ai));
    }

    #[test]
    fn test_word_bonus_equals_length() {
        let mut scores = Scoreboard::new();
        scores.record_correct(Owner::Ai);
        assert_eq!(scores.record_word(Owner::Ai, 5), 5);
        let ai = scores.side(Owner::Ai);
        assert_eq!(ai.score(), 6);
        assert_eq!(ai.correct(), 1);
        assert_eq!(ai.words_completed(), 1);
        assert_eq!(scores.side(Owner::Player).score(), 0);
    }

    #[test]
    fn test_leader_and_reset() {
        let mut scores = Scoreboard::new();
        assert_eq!(scores.leader(), None);
        scores.record_correct(Owner::Player);
        assert_eq!(scores.leader(), Some(Owner::Player));
        scores.reset();
        assert_eq!(scores, Scoreboard::default());
    }
}
