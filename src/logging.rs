//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so logs go to `civic.log` under the user's local
//! data directory. Logging is optional: if the directory or file cannot be
//! created, or a subscriber is already installed, nothing happens.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

const LOG_FILE: &str = "civic.log";

/// Directory holding the log file, e.g. `~/.local/share/civic`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("civic"))
}

/// Install the global subscriber with the given `EnvFilter` directive.
///
/// Returns the log file path when logging was enabled.
pub fn init(filter: &str) -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok()?;

    Some(path)
}

/// Parse `filter`, falling back to the default on bad syntax.
fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
