// file: src/logging/logger.rs
// version: 2.1.0
// guid: 51c9e0f7-8a3d-4b62-9e15-c04f7b2d86a9

//! Logger handle and its generator

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::levels::{level_map, Level};
use crate::transport::{Transport, TransportDescriptor, TransportResolver};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Options for a single `create` call
///
/// Fields other than `name`, `level` and `transports` are kept as metadata
/// and attached to every event the logger writes. Nothing is interpreted as
/// an engine setting: any extra key, engine-style or not, appears in the
/// `meta` field of every line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggerOptions {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub transports: Option<Vec<TransportDescriptor>>,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a named, cacheable logger
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_transport(mut self, descriptor: TransportDescriptor) -> Self {
        self.transports.get_or_insert_with(Vec::new).push(descriptor);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// A leveled logger backed by one or more transports
#[derive(Debug)]
pub struct Logger {
    name: Option<String>,
    level: Level,
    transports: Vec<Transport>,
    meta: Map<String, Value>,
    meta_json: Option<String>,
}

macro_rules! level_methods {
    ($($method:ident => $level:expr),* $(,)?) => {
        $(
            #[inline]
            pub fn $method(&self, message: impl fmt::Display) {
                self.log($level, message)
            }
        )*
    };
}

impl Logger {
    /// Resolve the transports in `options` and build the logger
    pub fn generate(options: LoggerOptions, config: &RegistryConfig) -> Result<Self> {
        debug!("generate logger");
        let level = options.level.unwrap_or(config.default_level);
        let resolver = TransportResolver::new(&config.base_log_dir, level);
        let transports = resolver.resolve(options.transports)?;

        let meta_json = if options.meta.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&options.meta)?)
        };

        Ok(Self {
            name: options.name,
            level,
            transports,
            meta: options.meta,
            meta_json,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Default threshold handed to transports without their own level
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }

    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    /// Level name to severity rank map
    pub fn levels(&self) -> Vec<(&'static str, u8)> {
        level_map()
    }

    /// Write `message` to every transport whose threshold `level` passes
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        let message = message.to_string();
        self.write(level, &message, self.meta_json.as_deref());
    }

    /// Like [`Logger::log`], with per-call fields merged over the logger's metadata
    pub fn log_with_meta(
        &self,
        level: Level,
        message: impl fmt::Display,
        fields: &Map<String, Value>,
    ) {
        let mut merged = self.meta.clone();
        merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        let meta = Value::Object(merged).to_string();
        self.write(level, &message.to_string(), Some(&meta));
    }

    fn write(&self, level: Level, message: &str, meta: Option<&str>) {
        let name = self.name.as_deref().unwrap_or_default();
        for transport in &self.transports {
            transport.emit(name, level, message, meta);
        }
    }

    level_methods! {
        trace => Level::Trace,
        input => Level::Input,
        verbose => Level::Verbose,
        prompt => Level::Prompt,
        debug => Level::Debug,
        info => Level::Info,
        data => Level::Data,
        help => Level::Help,
        warn => Level::Warn,
        error => Level::Error,
    }
}
