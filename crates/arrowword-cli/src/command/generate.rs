use std::{fmt::Write as _, path::PathBuf};

use anyhow::Context as _;
use arrowword_engine::{BoardGenerator, Direction, GameSeed, GeneratorConfig, Puzzle};
use serde::Serialize;

use crate::{
    command::BoardArg,
    util::{self, LogTarget, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    #[clap(flatten)]
    board: BoardArg,
    /// Discard boards with fewer words than this
    #[clap(long)]
    min_words: Option<usize>,
    /// Attempts before giving up
    #[clap(long)]
    max_attempts: Option<usize>,
    /// Print the board as JSON
    #[clap(long)]
    json: bool,
    /// Output file (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GeneratedBoard<'a> {
    seed: GameSeed,
    config: &'a GeneratorConfig,
    density: f64,
    puzzle: &'a Puzzle,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        board,
        min_words,
        max_attempts,
        json,
        output,
    } = arg;

    util::init_logging(&LogTarget::Stderr)?;

    let defaults = board.generator_config();
    let config = GeneratorConfig {
        min_words: min_words.unwrap_or(defaults.min_words),
        max_attempts: max_attempts.unwrap_or(defaults.max_attempts),
        ..defaults
    };
    let vocabulary = board.load_vocabulary(config.max_word_len)?;
    let seed = board.seed();

    let generator = BoardGenerator::new(config.clone());
    let puzzle = generator
        .generate(&vocabulary, &mut seed.rng())
        .with_context(|| format!("Failed to generate a board (seed {seed})"))?;
    tracing::info!(%seed, words = puzzle.words().len(), "board generated");

    let mut output = Output::from_output_path(output.clone())?;
    if *json {
        output.write_json(&GeneratedBoard {
            seed,
            config: &config,
            density: puzzle.density(),
            puzzle: &puzzle,
        })?;
    } else {
        output.write_text(&render_text(&puzzle, seed))?;
    }
    Ok(())
}

/// Renders the board followed by its clue list, one section per direction.
fn render_text(puzzle: &Puzzle, seed: GameSeed) -> String {
    let mut text = String::new();
    _ = writeln!(text, "seed: {seed}");
    _ = writeln!(text, "{}", puzzle.board());

    for (title, direction) in [("Across", Direction::Horizontal), ("Down", Direction::Vertical)] {
        let mut words: Vec<_> = puzzle
            .words()
            .iter()
            .filter(|word| word.direction == direction)
            .collect();
        if words.is_empty() {
            continue;
        }
        words.sort_by_key(|word| word.start);
        _ = writeln!(text, "{title}:");
        for word in words {
            _ = writeln!(
                text,
                "  {} {} ({}): {}",
                word.start, word.text, word.display, word.hint
            );
        }
    }
    text
}
