//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file in the data
//! directory. `RUST_LOG` overrides the default `info` filter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const DEFAULT_FILTER: &str = "info";

/// HTTP stack crates that are noisy at `info`.
const QUIET_DIRECTIVES: [&str; 2] = ["hyper_util=warn", "reqwest=warn"];

/// Builds the filter from `RUST_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    QUIET_DIRECTIVES
        .iter()
        .filter_map(|directive| directive.parse().ok())
        .fold(filter, EnvFilter::add_directive)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global subscriber writing to `log_path`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(log_path: &Path) -> Result<()> {
    let file = open_log_file(log_path)?;

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;

    tracing::info!("logging to {}", log_path.display());
    Ok(())
}
