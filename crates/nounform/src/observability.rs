//! Logging and tracing setup for the nounform CLI.
//!
//! Console diagnostics go to stderr (stdout belongs to command output).
//! When a log target is available, events are also written as JSONL via a
//! non-blocking appender:
//!
//! - `NOUNFORM_LOG_PATH` - exact log file (append, never rotated)
//! - `NOUNFORM_LOG_DIR` - daily-rotated files in this directory
//! - `log_dir` config key - same as `NOUNFORM_LOG_DIR`, lower precedence
//! - otherwise the platform data directory, e.g. `~/.local/share/nounform/logs/`

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Where file logs should go, resolved from environment and config.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Exact log file path (`NOUNFORM_LOG_PATH`). Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files (`NOUNFORM_LOG_DIR` or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the file log target from environment variables, falling back
    /// to the config file's `log_dir` when the environment sets nothing.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("NOUNFORM_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("NOUNFORM_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Open the file writer for this target.
    ///
    /// Explicit targets (env var or config) propagate their errors; the
    /// implicit platform default degrades to `None` so a missing or
    /// read-only data directory never breaks the CLI itself.
    fn file_writer(&self) -> anyhow::Result<Option<(NonBlocking, WorkerGuard)>> {
        if let Some(ref path) = self.log_path {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            return Ok(Some(tracing_appender::non_blocking(file)));
        }

        if let Some(ref dir) = self.log_dir {
            return Ok(Some(rotated_writer(dir)?));
        }

        match default_log_dir() {
            Some(dir) => Ok(rotated_writer(&dir).ok()),
            None => Ok(None),
        }
    }
}

fn rotated_writer(dir: &std::path::Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("nounform")
        .filename_suffix("jsonl")
        .build(dir)
        .with_context(|| format!("failed to open log directory {}", dir.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "nounform")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the log filter from CLI flags, `RUST_LOG`, and the config level.
///
/// Precedence: `--quiet` forces `error`; `-v`/`-vv` force `debug`/`trace`;
/// otherwise `RUST_LOG` applies when set, then the config file's level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let directives = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => std::env::var("RUST_LOG").unwrap_or_else(|_| config_level.to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };
    // EnvFilter::new ignores invalid directives rather than erroring.
    EnvFilter::new(directives)
}

/// Keeps the non-blocking log writer alive; hold until exit.
pub struct Guard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber: stderr layer plus optional JSONL file layer.
pub fn init_observability(config: &ObservabilityConfig, filter: EnvFilter) -> anyhow::Result<Guard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let (file_layer, file_guard) = match config.file_writer()? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(Guard { _file: file_guard })
}
