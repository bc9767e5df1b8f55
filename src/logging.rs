//! Diagnostic output setup.
//!
//! The marquee owns the terminal, so diagnostics never go to stdout or
//! stderr. [`init_file_logging`] installs a `tracing` subscriber writing to
//! a file; without it every event is discarded.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "vmarquee=info";

/// Append `tracing` output to the file at `path`.
///
/// The filter comes from `RUST_LOG` if set, else [`DEFAULT_FILTER`]. Fails
/// if the file cannot be opened or a global subscriber is already set.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Io(io::Error::other(err)))?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
