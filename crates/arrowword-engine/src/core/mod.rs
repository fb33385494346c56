pub use self::{board::*, placed_word::*, vocabulary::*};

pub(crate) mod board;
pub(crate) mod placed_word;
pub(crate) mod vocabulary;
