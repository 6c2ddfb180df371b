//! Tracing subscriber setup.
//!
//! The calculator screen owns stdout, so interactive runs log to a file.
//! One-shot runs log to stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "TIPCALC_LOG";

/// Filter used when `TIPCALC_LOG` is unset.
///
/// Stderr shares the terminal with one-shot output, so it stays quiet
/// below warn unless `-v` is given.
fn default_directive(verbose: bool, to_stderr: bool) -> &'static str {
    match (verbose, to_stderr) {
        (true, _) => "tipcalc=debug",
        (false, true) => "tipcalc=warn",
        (false, false) => "tipcalc=info",
    }
}

fn env_filter(verbose: bool, to_stderr: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, to_stderr)))
}

/// Default log file location: <data_local_dir>/tipcalc/tipcalc.log
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tipcalc")
        .join("tipcalc.log")
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Log to a file for the interactive screen
pub fn init_file_logger(path: &Path, verbose: bool) -> io::Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(env_filter(verbose, false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

/// Log to stderr for one-shot runs
pub fn init_stderr_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
