// file: src/logging/mod.rs
// version: 2.0.0
// guid: e3b7a1d6-5c82-4f09-b4e1-7a26d0c9f318

//! Logger handles plus diagnostics setup for the crate itself

pub mod logger;

pub use logger::{Logger, LoggerOptions};

use crate::error::LoggerError;
use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber showing this crate's own diagnostics
///
/// Loggers built by the registry write through their own dispatchers and
/// are unaffected by this subscriber.
pub fn init_diagnostics(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| LoggerError::config(format!("Failed to initialize diagnostics: {}", e)))?;

    Ok(())
}
