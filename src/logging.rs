//! Logger setup.
//!
//! The game owns the terminal, so logs never go to stdout/stderr while it
//! runs: they go to a file, or nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
