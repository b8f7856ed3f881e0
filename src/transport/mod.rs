// file: src/transport/mod.rs
// version: 1.0.0
// guid: 0c4d8e1a-6b27-4f93-a5d0-e18f3b72c946

//! Transport descriptors and their resolution into live sinks.
//!
//! A [`TransportDescriptor`] is the ephemeral configuration record a caller
//! hands to the registry. The [`TransportResolver`] fills in defaults for
//! each kind and builds a [`Transport`]: a `tracing` dispatcher whose only
//! layer is the formatting layer for that sink.

pub mod console;
pub mod daily;
pub mod file;

pub use console::{ConsoleOptions, ConsoleSettings};
pub use daily::{DailyOptions, DailySettings};
pub use file::{FileOptions, FileSettings};

use crate::error::{LoggerError, Result};
use crate::levels::Level;
use colored::Colorize;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn, Dispatch};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, Layer, Registry};

/// Target attached to every event a logger emits
pub const EVENT_TARGET: &str = "logger_registry";

/// File name used when a file or daily transport has no name
pub const DEFAULT_FILE_NAME: &str = "app.log";

pub(crate) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Transport configuration record, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub enum TransportDescriptor {
    Console(ConsoleOptions),
    File(FileOptions),
    Daily(DailyOptions),
    /// A `type` this crate does not know; skipped during resolution
    Unknown { kind: String },
}

#[derive(Deserialize)]
struct RawDescriptor {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    options: Map<String, Value>,
}

impl TryFrom<RawDescriptor> for TransportDescriptor {
    type Error = serde_json::Error;

    fn try_from(raw: RawDescriptor) -> std::result::Result<Self, Self::Error> {
        let options = Value::Object(raw.options);
        Ok(match raw.kind.as_str() {
            "console" => TransportDescriptor::Console(serde_json::from_value(options)?),
            "file" => TransportDescriptor::File(serde_json::from_value(options)?),
            "daily" => TransportDescriptor::Daily(serde_json::from_value(options)?),
            _ => TransportDescriptor::Unknown { kind: raw.kind },
        })
    }
}

impl TransportDescriptor {
    /// Console descriptor with every option left to its default
    pub fn console() -> Self {
        TransportDescriptor::Console(ConsoleOptions::default())
    }

    /// File descriptor named `name`
    pub fn file(name: impl Into<String>) -> Self {
        TransportDescriptor::File(FileOptions {
            name: Some(name.into()),
            ..FileOptions::default()
        })
    }

    /// Daily rotating descriptor named `name`
    pub fn daily(name: impl Into<String>) -> Self {
        TransportDescriptor::Daily(DailyOptions {
            name: Some(name.into()),
            ..DailyOptions::default()
        })
    }

    /// Descriptor of an unrecognized kind
    pub fn unknown(kind: impl Into<String>) -> Self {
        TransportDescriptor::Unknown { kind: kind.into() }
    }

    /// The `type` tag as written in configuration
    pub fn kind_str(&self) -> &str {
        match self {
            TransportDescriptor::Console(_) => TransportKind::Console.as_str(),
            TransportDescriptor::File(_) => TransportKind::File.as_str(),
            TransportDescriptor::Daily(_) => TransportKind::Daily.as_str(),
            TransportDescriptor::Unknown { kind } => kind,
        }
    }
}

/// Supported transport kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Console,
    File,
    Daily,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Console => "console",
            TransportKind::File => "file",
            TransportKind::Daily => "daily",
        }
    }
}

/// Transport options after defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub enum TransportSettings {
    Console(ConsoleSettings),
    File(FileSettings),
    Daily(DailySettings),
}

impl TransportSettings {
    pub fn kind(&self) -> TransportKind {
        match self {
            TransportSettings::Console(_) => TransportKind::Console,
            TransportSettings::File(_) => TransportKind::File,
            TransportSettings::Daily(_) => TransportKind::Daily,
        }
    }

    /// Minimum level this transport accepts
    pub fn level(&self) -> Level {
        match self {
            TransportSettings::Console(s) => s.level,
            TransportSettings::File(s) => s.level,
            TransportSettings::Daily(s) => s.level,
        }
    }

    pub fn colorize(&self) -> bool {
        match self {
            TransportSettings::Console(s) => s.colorize,
            TransportSettings::File(s) => s.colorize,
            TransportSettings::Daily(s) => s.colorize,
        }
    }

    fn layer(&self) -> Result<BoxedLayer> {
        match self {
            TransportSettings::Console(s) => Ok(s.layer()),
            TransportSettings::File(s) => s.layer(),
            TransportSettings::Daily(s) => s.layer(),
        }
    }
}

/// A live sink: resolved settings plus the dispatcher that writes to it
#[derive(Debug, Clone)]
pub struct Transport {
    settings: TransportSettings,
    dispatch: Dispatch,
}

impl Transport {
    /// Build the sink described by `settings`
    pub fn new(settings: TransportSettings) -> Result<Self> {
        let layer = settings.layer()?;
        let dispatch = Dispatch::new(Registry::default().with(layer));
        Ok(Self { settings, dispatch })
    }

    pub fn kind(&self) -> TransportKind {
        self.settings.kind()
    }

    pub fn level(&self) -> Level {
        self.settings.level()
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    /// Write one event if `level` passes this transport's threshold
    pub(crate) fn emit(&self, logger: &str, level: Level, message: &str, meta: Option<&str>) {
        if !level.passes(self.level()) {
            return;
        }

        let label = if self.settings.colorize() {
            level.as_str().color(level.color()).to_string()
        } else {
            level.as_str().to_string()
        };

        tracing::dispatcher::with_default(&self.dispatch, || {
            emit_event(level, logger, &label, message, meta)
        });
    }
}

macro_rules! event_at {
    ($lvl:expr, $logger:expr, $label:expr, $severity:expr, $meta:expr, $message:expr) => {
        tracing::event!(
            target: EVENT_TARGET,
            $lvl,
            logger = $logger,
            label = $label,
            severity = $severity,
            meta = $meta,
            "{}",
            $message
        )
    };
}

fn emit_event(level: Level, logger: &str, label: &str, message: &str, meta: Option<&str>) {
    let severity = level.rank();
    match level {
        Level::Trace | Level::Input => {
            event_at!(tracing::Level::TRACE, logger, label, severity, meta, message)
        }
        Level::Verbose | Level::Prompt | Level::Debug => {
            event_at!(tracing::Level::DEBUG, logger, label, severity, meta, message)
        }
        Level::Info | Level::Data | Level::Help => {
            event_at!(tracing::Level::INFO, logger, label, severity, meta, message)
        }
        Level::Warn => event_at!(tracing::Level::WARN, logger, label, severity, meta, message),
        Level::Error => event_at!(tracing::Level::ERROR, logger, label, severity, meta, message),
    }
}

/// Open a file appender for `path`, creating its directory when missing
pub(crate) fn open_appender(
    path: &Path,
    rotation: Rotation,
    suffix: Option<&str>,
    max_files: Option<usize>,
) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggerError::config(format!("Invalid log file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(file_name);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    if let Some(max_files) = max_files {
        builder = builder.max_log_files(max_files);
    }

    Ok(builder.build(directory)?)
}

/// Applies per-kind defaults and builds transports
#[derive(Debug, Clone)]
pub struct TransportResolver {
    base_log_dir: PathBuf,
    default_level: Level,
}

impl TransportResolver {
    pub fn new(base_log_dir: impl Into<PathBuf>, default_level: Level) -> Self {
        Self {
            base_log_dir: base_log_dir.into(),
            default_level,
        }
    }

    pub fn base_log_dir(&self) -> &Path {
        &self.base_log_dir
    }

    pub fn default_level(&self) -> Level {
        self.default_level
    }

    pub fn console(&self, options: ConsoleOptions) -> Result<Transport> {
        Transport::new(TransportSettings::Console(
            options.resolve(self.default_level),
        ))
    }

    pub fn file(&self, options: FileOptions) -> Result<Transport> {
        let settings = options.resolve(&self.base_log_dir, self.default_level);
        debug!("write to file {}", settings.filename.display());
        Transport::new(TransportSettings::File(settings))
    }

    pub fn daily(&self, options: DailyOptions) -> Result<Transport> {
        Transport::new(TransportSettings::Daily(
            options.resolve(&self.base_log_dir, self.default_level),
        ))
    }

    /// Build a transport for every recognized descriptor, in order
    pub fn convert(&self, descriptors: Vec<TransportDescriptor>) -> Result<Vec<Transport>> {
        debug!("convert transports");
        let mut transports = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            match descriptor {
                TransportDescriptor::Console(options) => transports.push(self.console(options)?),
                TransportDescriptor::File(options) => transports.push(self.file(options)?),
                TransportDescriptor::Daily(options) => transports.push(self.daily(options)?),
                TransportDescriptor::Unknown { kind } => {
                    warn!("Skipping unknown transport type '{}'", kind);
                }
            }
        }

        Ok(transports)
    }

    /// Guarantee at least one sink by falling back to the console
    pub fn ensure(&self, transports: Vec<Transport>) -> Result<Vec<Transport>> {
        debug!("ensure transport");
        if transports.is_empty() {
            Ok(vec![self.console(ConsoleOptions::default())?])
        } else {
            Ok(transports)
        }
    }

    /// `convert` followed by `ensure`
    pub fn resolve(&self, descriptors: Option<Vec<TransportDescriptor>>) -> Result<Vec<Transport>> {
        let transports = self.convert(descriptors.unwrap_or_default())?;
        self.ensure(transports)
    }
}
