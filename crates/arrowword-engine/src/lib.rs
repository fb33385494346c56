//! Arrowword puzzle generation and two-player filling game.
//!
//! - [`core`] - Board cells, positions, placed words and vocabulary normalization
//! - [`generator`] - Builds a fully covered puzzle board from a vocabulary
//! - [`engine`] - Game session: rack, fill state, scoring and the AI opponent

pub use self::{core::*, engine::*, generator::*};

pub mod core;
pub mod engine;
pub mod generator;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    #[display("vocabulary has no usable words")]
    EmptyVocabulary,
    #[display("a {rows}x{cols} board cannot hold any word")]
    InvalidDimensions { rows: usize, cols: usize },
    #[display(
        "no dense enough board after {attempts} attempts (best attempt placed {best_word_count} words)"
    )]
    GenerationFailed {
        attempts: usize,
        best_word_count: usize,
    },
}

/// Reasons a fill attempt is rejected without touching the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalFillError {
    #[display("it is not the player's turn")]
    NotPlayerTurn,
    #[display("cell {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] core::Position),
    #[display("cell {_0} does not hold a letter")]
    NotLetterCell(#[error(not(source))] core::Position),
    #[display("cell {_0} is already filled")]
    AlreadyFilled(#[error(not(source))] core::Position),
    #[display("no rack tile is selected")]
    NoTileSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TurnError {
    #[display("it is not the player's turn")]
    NotPlayerTurn,
}

/// Reasons [`GameSession::new_board`] could not replace the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum NewBoardError {
    #[display("the AI turn is still in progress")]
    #[from(ignore)]
    AiTurnInProgress,
    #[display("{_0}")]
    Generate(GenerateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RackError {
    #[display("it is not the player's turn")]
    NotPlayerTurn,
    #[display("rack has no tile at index {index} (holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
