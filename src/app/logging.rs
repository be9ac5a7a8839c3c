//! Logger initialization.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is read first so per-module filters still apply; `level` then
/// replaces its global level.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.format_target(false);
    builder.try_init().context("Failed to initialize logger")
}
