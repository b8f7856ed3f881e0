// file: src/transport/file.rs
// version: 1.0.0
// guid: a28f6c04-91d3-47e5-8b2a-d57e0f4c3b98

//! Plain file transport

use super::{open_appender, BoxedLayer, DEFAULT_FILE_NAME};
use crate::error::Result;
use crate::levels::Level;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{fmt, Layer};

/// File options as written in configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    pub name: Option<String>,
    pub filename: Option<PathBuf>,
    pub level: Option<Level>,
    pub colorize: Option<bool>,
    pub json: Option<bool>,
}

/// File options with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct FileSettings {
    pub name: Option<String>,
    pub filename: PathBuf,
    pub level: Level,
    pub colorize: bool,
    pub json: bool,
}

impl FileOptions {
    /// Default file is `<base_log_dir>/<name>.log`, or `app.log` without a name
    pub fn resolve(self, base_log_dir: &Path, default_level: Level) -> FileSettings {
        let filename = self.filename.unwrap_or_else(|| match self.name.as_deref() {
            Some(name) if !name.is_empty() => base_log_dir.join(format!("{}.log", name)),
            _ => base_log_dir.join(DEFAULT_FILE_NAME),
        });

        FileSettings {
            name: self.name,
            filename,
            level: self.level.unwrap_or(default_level),
            colorize: self.colorize.unwrap_or(true),
            json: self.json.unwrap_or(false),
        }
    }
}

impl FileSettings {
    pub(crate) fn layer(&self) -> Result<BoxedLayer> {
        let appender = open_appender(&self.filename, Rotation::NEVER, None, None)?;
        let base = fmt::layer().with_ansi(self.colorize).with_writer(appender);

        Ok(if self.json {
            base.json().boxed()
        } else {
            base.boxed()
        })
    }
}
