//! Result logging to disk.
//!
//! When enabled, appends each resolved calculation to a daily log file named
//! `calc_<date>.log` in the configured log directory (default:
//! `~/.local/share/crabcalc/logs/`). Also hosts the diagnostic tracing setup.

use crate::app::state::CalcEntry;
use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Writes resolved calculations to daily log files.
///
/// The file handle is cached until the date rolls over. Falls back to
/// `/dev/null` if a log file cannot be created.
pub struct CalcLogger {
    enabled: bool,
    log_dir: String,
    handle: Option<(String, fs::File)>,
}

impl CalcLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            handle: None,
        }
    }

    /// Append one entry to today's log file. No-op if logging is disabled.
    pub fn log_entry(&mut self, entry: &CalcEntry) {
        if !self.enabled {
            return;
        }

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("calc_{}.log", date);

        let stale = self
            .handle
            .as_ref()
            .map(|(name, _)| name != &filename)
            .unwrap_or(true);
        if stale {
            let log_dir = expand_home(&self.log_dir);
            let _ = fs::create_dir_all(&log_dir);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(&filename))
                .unwrap_or_else(|_| {
                    // Fallback: a sink that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                });
            self.handle = Some((filename, file));
        }

        if let Some((_, file)) = &mut self.handle {
            let _ = writeln!(
                file,
                "[{}] {} = {}",
                entry.timestamp, entry.expression, entry.result
            );
        }
    }
}

/// Installs a file-writing tracing subscriber when a trace file is
/// configured; otherwise diagnostics are discarded. Terminal output is not
/// an option since the alternate screen owns stdout.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let Some(ref trace_file) = config.trace_file else {
        return Ok(());
    };
    let path = expand_home(trace_file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create trace directory {}", parent.display()))?;
    }
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create trace file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crabcalc=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
