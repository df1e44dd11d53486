//! Log setup for the terminal host.
//!
//! The TUI owns stdout, so logs go to a file. The filter comes from
//! `TCREACTIONS_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppResult;

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "TCREACTIONS_LOG";

const LOG_FILE_NAME: &str = "tcreactions.log";

/// Log file used when none is configured.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `path` or the default file.
///
/// Returns the file in use. A subscriber that is already installed is left
/// in place.
pub fn init_logging(path: Option<&Path>) -> AppResult<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tcreactions starting");
    Ok(path)
}
