// file: src/transport/console.rs
// version: 1.0.0
// guid: 5e91a7c3-2d40-4b8f-b613-9c0a4e27f5d1

//! Console transport

use super::BoxedLayer;
use crate::levels::Level;
use serde::Deserialize;
use tracing_subscriber::{fmt, Layer};

/// Console options as written in configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleOptions {
    pub level: Option<Level>,
    pub colorize: Option<bool>,
    pub pretty_print: Option<bool>,
    /// Write to stderr instead of stdout
    pub stderr: Option<bool>,
}

/// Console options with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleSettings {
    pub level: Level,
    pub colorize: bool,
    pub pretty_print: bool,
    pub stderr: bool,
}

impl ConsoleOptions {
    /// Colorize and pretty print default to on
    pub fn resolve(self, default_level: Level) -> ConsoleSettings {
        ConsoleSettings {
            level: self.level.unwrap_or(default_level),
            colorize: self.colorize.unwrap_or(true),
            pretty_print: self.pretty_print.unwrap_or(true),
            stderr: self.stderr.unwrap_or(false),
        }
    }
}

impl ConsoleSettings {
    pub(crate) fn layer(&self) -> BoxedLayer {
        let base = fmt::layer().with_ansi(self.colorize).with_target(false);

        match (self.pretty_print, self.stderr) {
            (true, false) => base.pretty().with_writer(std::io::stdout).boxed(),
            (true, true) => base.pretty().with_writer(std::io::stderr).boxed(),
            (false, false) => base.compact().with_writer(std::io::stdout).boxed(),
            (false, true) => base.compact().with_writer(std::io::stderr).boxed(),
        }
    }
}
