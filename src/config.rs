use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::Result;
use crate::grid::{Grid, MAX_SIDE, MIN_SIDE};

pub const TICK_INTERVAL: Duration = Duration::from_millis(80);
pub const DEFAULT_WIDTH: u16 = 50;
pub const DEFAULT_HEIGHT: u16 = 25;
pub const LOG_FILE_NAME: &str = "snake-tui.log";

/// Snake in the terminal. Arrow keys or WASD to steer, Esc, q or Ctrl+C to quit.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Show the head position, direction and bounds check above the board.
    #[arg(long)]
    pub debug: bool,

    /// Board width in columns, border included.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(MIN_SIDE as i64..=MAX_SIDE as i64)
    )]
    pub width: u16,

    /// Board height in rows, border included.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u16).range(MIN_SIDE as i64..=MAX_SIDE as i64)
    )]
    pub height: u16,

    /// Seed for target placement, random if not given.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Where to write the log. Defaults to the system temp directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}
