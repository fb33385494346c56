use std::path::PathBuf;

use arrowword_engine::{Difficulty, Owner, SessionConfig};

use crate::{
    command::{
        BoardArg,
        play::app::{GameSetup, PlayApp},
    },
    tui::{App as _, Tui},
    util::{self, LogTarget},
};

mod app;
mod screens;

const DEFAULT_LOG_FILE: &str = "arrowword.log";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    board: BoardArg,
    /// AI difficulty: easy, medium or hard (asked in a menu when omitted)
    #[clap(long)]
    difficulty: Option<Difficulty>,
    /// Log file; the terminal is taken by the game
    #[clap(long)]
    log_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        board,
        difficulty,
        log_file,
    } = arg;

    let log_file = log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    util::init_logging(&LogTarget::File(log_file))?;

    let config = SessionConfig {
        generator: board.generator_config(),
        ..SessionConfig::default()
    };
    let vocabulary = board.load_vocabulary(config.generator.max_word_len)?;
    let seed = board.seed();
    tracing::info!(%seed, "starting game");

    let mut app = PlayApp::new(
        GameSetup {
            vocabulary,
            config,
            seed,
        },
        *difficulty,
    );
    if !app.should_exit() {
        Tui::new().run(&mut app)?;
    }

    if let Some(scores) = app.scores() {
        println!(
            "Final score: you {} / AI {} (seed {seed})",
            scores.side(Owner::Player).score(),
            scores.side(Owner::Ai).score()
        );
    }
    if let Some(err) = app.into_failure() {
        let context = format!("Could not generate a board (seed {seed})");
        return Err(anyhow::Error::new(err).context(context));
    }
    Ok(())
}
