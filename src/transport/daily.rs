// file: src/transport/daily.rs
// version: 1.1.0
// guid: c7d35b19-0e6a-4a82-9f4c-31b8e6d2a057

//! Time-rotated file transport
//!
//! Rotated files are named `<filename>.<date>.<suffix>`. The date format is
//! fixed by the appender, so the date pattern only selects the rotation
//! period (daily, hourly or minutely) and the suffix that follows the date.

use super::{open_appender, BoxedLayer, DEFAULT_FILE_NAME};
use crate::error::{LoggerError, Result};
use crate::levels::Level;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{fmt, Layer};

/// Date pattern used when none is configured
pub const DEFAULT_DATE_PATTERN: &str = ".yyyy-MM-dd.log";

const DAILY_TOKEN: &str = "yyyy-MM-dd";
const HOURLY_TOKEN: &str = "yyyy-MM-dd-HH";
const MINUTELY_TOKEN: &str = "yyyy-MM-dd-HH-mm";
const SUFFIX_DATE_FIELDS: [&str; 5] = ["yyyy", "MM", "dd", "HH", "mm"];

/// Daily options as written in configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOptions {
    pub name: Option<String>,
    pub filename: Option<PathBuf>,
    pub level: Option<Level>,
    pub date_pattern: Option<String>,
    pub colorize: Option<bool>,
    /// Number of rotated files to keep
    pub max_files: Option<usize>,
}

/// Daily options with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct DailySettings {
    pub name: Option<String>,
    pub filename: PathBuf,
    pub level: Level,
    pub date_pattern: String,
    pub colorize: bool,
    pub max_files: Option<usize>,
}

impl DailyOptions {
    pub fn resolve(self, base_log_dir: &Path, default_level: Level) -> DailySettings {
        let filename = self.filename.unwrap_or_else(|| match self.name.as_deref() {
            Some(name) if !name.is_empty() => base_log_dir.join(name),
            _ => base_log_dir.join(DEFAULT_FILE_NAME),
        });

        DailySettings {
            name: self.name,
            filename,
            level: self.level.unwrap_or(default_level),
            date_pattern: self
                .date_pattern
                .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string()),
            colorize: self.colorize.unwrap_or(false),
            max_files: self.max_files,
        }
    }
}

impl DailySettings {
    pub(crate) fn layer(&self) -> Result<BoxedLayer> {
        let (rotation, suffix) = parse_date_pattern(&self.date_pattern)?;
        let appender = open_appender(&self.filename, rotation, suffix, self.max_files)?;

        Ok(fmt::layer()
            .with_ansi(self.colorize)
            .with_writer(appender)
            .boxed())
    }
}

/// Split a date pattern into its rotation period and file suffix
///
/// The date token may only be preceded by `.` and followed by `.<suffix>`;
/// the suffix itself must not hold further date fields.
pub fn parse_date_pattern(pattern: &str) -> Result<(Rotation, Option<&str>)> {
    let invalid = |reason: &str| {
        LoggerError::invalid_date_pattern(format!("'{}' {}", pattern, reason))
    };

    let (rotation, prefix, rest) = [
        (Rotation::MINUTELY, MINUTELY_TOKEN),
        (Rotation::HOURLY, HOURLY_TOKEN),
        (Rotation::DAILY, DAILY_TOKEN),
    ]
    .into_iter()
    .find_map(|(rotation, token)| {
        pattern
            .split_once(token)
            .map(|(prefix, rest)| (rotation, prefix, rest))
    })
    .ok_or_else(|| {
        invalid(&format!(
            "must contain '{}', '{}' or '{}'",
            DAILY_TOKEN, HOURLY_TOKEN, MINUTELY_TOKEN
        ))
    })?;

    if !prefix.is_empty() && prefix != "." {
        return Err(invalid("may only start with '.' before the date"));
    }
    if !rest.is_empty() && !rest.starts_with('.') {
        return Err(invalid("must separate the suffix from the date with '.'"));
    }

    let suffix = rest.trim_start_matches('.');
    if SUFFIX_DATE_FIELDS.iter().any(|field| suffix.contains(field)) {
        return Err(invalid("has date fields the appender cannot format"));
    }

    Ok((rotation, (!suffix.is_empty()).then_some(suffix)))
}
