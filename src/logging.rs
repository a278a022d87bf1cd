use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TASKOS_LOG";

/// Log file name, kept next to the storage file
pub const LOG_FILE: &str = "taskos.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid TASKOS_LOG filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `TASKOS_LOG` when set, otherwise a level picked by `-v` count
fn env_filter(verbose: u8) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => Ok(EnvFilter::try_new(directive)?),
        _ => Ok(EnvFilter::try_new(default_level(verbose))?),
    }
}

/// Log to stderr. Used by the CLI subcommands.
pub fn init_stderr(verbose: u8) -> Result<(), LoggingError> {
    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

/// Log to a file, since the TUI owns the terminal
pub fn init_file(verbose: u8, path: &Path) -> Result<(), LoggingError> {
    let open_error = |source| LoggingError::OpenError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(open_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose)?)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

/// Log file path for a given storage file
pub fn log_path_for(storage_path: &Path) -> PathBuf {
    storage_path.with_file_name(LOG_FILE)
}
