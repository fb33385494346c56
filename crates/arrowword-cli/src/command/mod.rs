use std::path::PathBuf;

use arrowword_engine::{GameSeed, GeneratorConfig, Vocabulary};
use clap::{Parser, Subcommand};

use crate::util;

use self::{generate::GenerateArg, play::PlayArg};

mod generate;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the AI in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Generate a single board and print it
    Generate(#[clap(flatten)] GenerateArg),
}

/// Board and vocabulary options shared by all modes.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BoardArg {
    /// Vocabulary JSON file (built-in Spanish A1 list when omitted)
    #[clap(long)]
    vocabulary: Option<PathBuf>,
    /// Number of board rows, border included
    #[clap(long)]
    rows: Option<usize>,
    /// Number of board columns, border included
    #[clap(long)]
    cols: Option<usize>,
    /// Seed as 32 hex digits (random when omitted)
    #[clap(long)]
    seed: Option<GameSeed>,
}

impl BoardArg {
    pub(crate) fn generator_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            ..defaults
        }
    }

    pub(crate) fn load_vocabulary(&self, max_word_len: usize) -> anyhow::Result<Vocabulary> {
        util::read_vocabulary(self.vocabulary.as_deref(), max_word_len)
    }

    pub(crate) fn seed(&self) -> GameSeed {
        self.seed.unwrap_or_else(GameSeed::random)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
