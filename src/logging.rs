//! File-backed logging.
//!
//! The terminal is owned by the TUI, so env_logger writes to a file instead
//! of stderr. The filter comes from `TRANSPORTAI_LOG` (default `info`).

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};

/// Install the global logger, appending to `path`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().filter_or(LOG_FILTER_ENV, DEFAULT_LOG_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
