//! Game play on a generated board.
//!
//! - [`GameSession`] - Turn and scoring state machine for the player and the AI
//! - [`FillState`] - Which letter cells have been filled, and by whom
//! - [`Rack`] - The player's five letter tiles
//! - [`Scoreboard`] - Cumulative scores of both sides
//! - [`Opponent`] / [`RandomOpponent`] - Move policy of the AI
//! - [`GameSeed`] - Seed for reproducible games
//!
//! # Example
//!
//! ```
//! use arrowword_engine::{
//!     Difficulty, GameSeed, GameSession, SessionConfig, Vocabulary, VocabularyEntry,
//! };
//!
//! let vocabulary: Vocabulary = [
//!     ("gato", "cat"),
//!     ("toro", "bull"),
//!     ("oso", "bear"),
//!     ("sol", "sun"),
//!     ("luna", "moon"),
//!     ("mar", "sea"),
//!     ("casa", "house"),
//!     ("agua", "water"),
//! ]
//! .into_iter()
//! .map(|(word, hint)| VocabularyEntry::new(word, hint))
//! .collect();
//!
//! let config = SessionConfig {
//!     difficulty: Difficulty::Hard,
//!     ..SessionConfig::default()
//! };
//! let mut session = GameSession::start(vocabulary, config, GameSeed::from_u128(3)).unwrap();
//!
//! let planned = session.pass_turn().unwrap();
//! let moves = session.play_ai_turn();
//! assert!(moves.len() <= planned);
//! assert!(!session.state().is_ai_turn());
//! ```

pub use self::{fill_state::*, game_session::*, opponent::*, rack::*, scoreboard::*, seed::*};

mod fill_state;
mod game_session;
mod opponent;
mod rack;
mod scoreboard;
mod seed;
