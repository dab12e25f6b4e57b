//! Tracing setup
//!
//! Logs go to a file so they never interfere with the TUI or the line-based
//! prompt. `RUST_LOG` overrides the default `info` filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a file-backed tracing subscriber
///
/// Appends to `log_file`, creating it if needed. Keeps the existing global
/// subscriber if one is already set.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!(error = %e, "Global subscriber already set, keeping it");
    }

    Ok(())
}
