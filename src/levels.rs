// file: src/levels.rs
// version: 1.0.0
// guid: 7b0e2d45-c93a-4f16-8e27-5a4d1f90b6c2

//! The fixed custom level set injected into every logger.
//!
//! Ten named levels ranked from 0 (most verbose) to 9 (most severe). Each
//! level carries a terminal color and maps onto the nearest
//! [`tracing::Level`] so the formatting layers can render it.

use crate::error::{LoggerError, Result};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A custom log level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Input,
    Verbose,
    Prompt,
    Debug,
    #[default]
    Info,
    Data,
    Help,
    Warn,
    Error,
}

impl Level {
    /// All levels ordered by rank
    pub const ALL: [Level; 10] = [
        Level::Trace,
        Level::Input,
        Level::Verbose,
        Level::Prompt,
        Level::Debug,
        Level::Info,
        Level::Data,
        Level::Help,
        Level::Warn,
        Level::Error,
    ];

    /// Severity rank, 0 is the most verbose
    pub fn rank(&self) -> u8 {
        match self {
            Level::Trace => 0,
            Level::Input => 1,
            Level::Verbose => 2,
            Level::Prompt => 3,
            Level::Debug => 4,
            Level::Info => 5,
            Level::Data => 6,
            Level::Help => 7,
            Level::Warn => 8,
            Level::Error => 9,
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Input => "input",
            Level::Verbose => "verbose",
            Level::Prompt => "prompt",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Data => "data",
            Level::Help => "help",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Terminal color used when a transport colorizes
    pub fn color(&self) -> Color {
        match self {
            Level::Trace => Color::Magenta,
            Level::Input | Level::Prompt | Level::Data => Color::BrightBlack,
            Level::Verbose | Level::Help => Color::Cyan,
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    /// Nearest tracing level
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            Level::Trace | Level::Input => tracing::Level::TRACE,
            Level::Verbose | Level::Prompt | Level::Debug => tracing::Level::DEBUG,
            Level::Info | Level::Data | Level::Help => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }

    /// Whether a message at `self` passes a transport whose threshold is `threshold`
    pub fn passes(&self, threshold: Level) -> bool {
        self.rank() >= threshold.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

/// Level name to rank map, ordered by rank
pub fn level_map() -> Vec<(&'static str, u8)> {
    Level::ALL.iter().map(|l| (l.as_str(), l.rank())).collect()
}
