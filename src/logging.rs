//! Installs the tracing subscriber.
//!
//! `dioxus::logger` writes to the browser console on wasm and to stderr on
//! native targets, so the same `tracing` calls work everywhere.

use crate::error::{AppError, Result};
use tracing::Level;

pub fn init_logging(level: Level) -> Result<()> {
    dioxus::logger::init(level).map_err(|e| AppError::Logging(e.to_string()))?;
    tracing::info!(%level, "Logging initialized");
    Ok(())
}
