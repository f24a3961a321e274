//! File logging. The terminal belongs to the game, so nothing is logged to it.

use std::fs::File;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::Result;

/// Level from `RUST_LOG`, `info` when unset or unknown.
fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info)
}

pub fn init(path: &Path) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let file = File::create(path)?;
    WriteLogger::init(level_from_env(), config, file)?;

    Ok(())
}
