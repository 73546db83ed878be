//! Logging init: append to a file under the XDG state dir, or log to stderr.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sumcheck=debug,sumcheck_core=debug";

/// Open `path` for appending, shared by every log event behind a lock.
fn open_log_file(path: &Path) -> Result<Mutex<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok(Mutex::new(file))
}

/// Initialize structured logging to `~/.local/state/sumcheck/sumcheck.log`.
/// `RUST_LOG` overrides the default filter. On failure (e.g. log dir
/// unwritable) returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sumcheck")?;
    let log_file_path = xdg_dirs.place_state_file("sumcheck.log")?;
    let writer = open_log_file(&log_file_path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("sumcheck logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Only warnings and above reach the
/// terminal unless RUST_LOG says otherwise.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
