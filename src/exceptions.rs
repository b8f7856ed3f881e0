// file: src/exceptions.rs
// version: 1.0.0
// guid: 9a6e3c17-f245-4d0b-8c93-72e1b5a04fd8

//! Process-wide handler recording uncaught panics
//!
//! The host calls [`install`] once at startup. Every panic afterwards is
//! written as a JSON line to the exceptions log before the previously
//! installed hook runs.

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::levels::Level;
use crate::logging::{Logger, LoggerOptions};
use crate::transport::{FileOptions, TransportDescriptor};
use serde_json::{Map, Value};
use std::any::Any;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

static INSTALLED: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Install the panic handler writing to `path`
///
/// Returns `Ok(false)` without touching anything when a handler is already
/// installed.
pub fn install(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = installed.as_ref() {
        debug!("Exceptions handler already writing to {}", existing.display());
        return Ok(false);
    }

    let logger = exceptions_logger(path)?;
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let thread = std::thread::current();
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "<unknown>".to_string());

        let mut fields = Map::new();
        fields.insert("thread".into(), Value::from(thread.name().unwrap_or("<unnamed>")));
        fields.insert("location".into(), Value::from(location));
        fields.insert("occurred_at".into(), Value::from(chrono::Utc::now().to_rfc3339()));

        logger.log_with_meta(
            Level::Error,
            format_args!("uncaught panic: {}", payload_message(info.payload())),
            &fields,
        );
        previous(info);
    }));

    info!("Uncaught panics will be written to {}", path.display());
    *installed = Some(path.to_path_buf());
    Ok(true)
}

/// File the installed handler writes to
pub fn installed_path() -> Option<PathBuf> {
    INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn exceptions_logger(path: &Path) -> Result<Logger> {
    let options = LoggerOptions::named("exceptions")
        .with_level(Level::Error)
        .with_transport(TransportDescriptor::File(FileOptions {
            filename: Some(path.to_path_buf()),
            colorize: Some(true),
            json: Some(true),
            ..FileOptions::default()
        }));

    Logger::generate(options, &RegistryConfig::default())
}

fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "Box<dyn Any>"
    }
}
