// file: src/lib.rs
// version: 3.0.0
// guid: 7e5a3c10-94bd-4f26-a8c7-d1b20f6e3958

//! # Logger Registry
//!
//! A factory and registry for named loggers. Callers describe a logger with
//! [`LoggerOptions`] (a name, a level and a list of console, file or daily
//! rotating transports) and get back either a fresh logger or the instance
//! already cached under that name.
//!
//! Formatting, file writing and rotation are delegated to `tracing`,
//! `tracing-subscriber` and `tracing-appender`.
//!
//! ```no_run
//! use logger_registry::{LoggerOptions, LoggerRegistry, RegistryConfig, TransportDescriptor};
//!
//! let registry = LoggerRegistry::new(RegistryConfig::default());
//! let logger = registry
//!     .create(LoggerOptions::named("app").with_transport(TransportDescriptor::file("info")))
//!     .unwrap();
//! logger.info("ready");
//! ```

pub mod config;
pub mod error;
pub mod exceptions;
pub mod levels;
pub mod logging;
pub mod plugin;
pub mod registry;
pub mod transport;

pub use config::{ConfigLoader, RegistryConfig};
pub use error::{LoggerError, Result};
pub use levels::Level;
pub use logging::{Logger, LoggerOptions};
pub use plugin::{setup, PluginApi};
pub use registry::LoggerRegistry;
pub use transport::{Transport, TransportDescriptor, TransportKind, TransportSettings};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
