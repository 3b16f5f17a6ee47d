mod block;
mod game;
mod score;
mod snake;
mod state;
mod term;

use std::fs::File;

use anyhow::{bail, Context, Result};
use crossterm::terminal;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::game::SnakeGame;

const LOG_FILE: &str = "serpent.log";

fn main() -> Result<()> {
    // The log goes to a file: stdout belongs to the game.
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).context("creating log file")?,
    )
    .context("initializing logger")?;
    info!("Starting serpent");

    let high_score =
        score::load(score::HIGH_SCORE_FILE).context("loading the high score file")?;
    info!("Loaded high score {}", high_score);

    let (width, height) = terminal::size().context("reading terminal size")?;
    let (min_width, min_height) = term::min_terminal_size();
    if width < min_width || height < min_height {
        bail!(
            "terminal is {}x{}, the playfield needs at least {}x{}",
            width,
            height,
            min_width,
            min_height
        );
    }

    let mut game = SnakeGame::new(high_score);
    game.init();
    game.run();
    game.shutdown();

    if game.high_score_beaten() {
        info!("Saving new high score {}", game.high_score());
        score::save(score::HIGH_SCORE_FILE, game.high_score())
            .context("saving the high score file")?;
    }

    Ok(())
}
