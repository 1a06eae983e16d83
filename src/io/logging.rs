use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "TICKLIST_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Path of the TUI log file inside the data dir
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("ticklist.log")
}

/// Log to a file in the data dir. The terminal is owned by the UI, so
/// nothing may be written to stdout/stderr while it runs. Logging is
/// skipped when the file cannot be opened.
pub fn init_tui_logging(data_dir: &Path) {
    if fs::create_dir_all(data_dir).is_err() {
        return;
    }
    let path = log_path(data_dir);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter("ticklist=info"))
        .with(file_layer)
        .try_init();

    tracing::info!(path = ?path, "tui logging initialized");
}

/// Log warnings and errors to stderr for one-shot CLI commands
pub fn init_cli_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter("ticklist=warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
