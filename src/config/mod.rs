// file: src/config/mod.rs
// version: 2.1.0
// guid: b86f2d03-1e7c-4a95-8d40-63e9c1a5f72b

//! Registry configuration
//!
//! Holds the directory file transports default into, the default level and
//! the exceptions log settings used by the plugin setup.

pub mod loader;

pub use loader::ConfigLoader;

use crate::levels::Level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory file transports write to when no filename is given
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Exceptions log file name inside the base log directory
pub const EXCEPTIONS_FILE_NAME: &str = "exceptions.log";

/// Registry-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_log_dir: PathBuf,
    pub default_level: Level,
    /// Overrides `<base_log_dir>/exceptions.log`
    pub exceptions_file: Option<PathBuf>,
    /// Install the panic handler during plugin setup; when unset, `setup`
    /// leaves uncaught panics unrecorded
    pub handle_exceptions: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            default_level: Level::Info,
            exceptions_file: None,
            handle_exceptions: false,
        }
    }
}

impl RegistryConfig {
    /// Config rooted at `base_log_dir`
    pub fn with_base_log_dir(base_log_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_log_dir: base_log_dir.into(),
            ..Self::default()
        }
    }

    /// Where uncaught panics are written
    pub fn exceptions_path(&self) -> PathBuf {
        self.exceptions_file
            .clone()
            .unwrap_or_else(|| self.base_log_dir.join(EXCEPTIONS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.base_log_dir, PathBuf::from("logs"));
        assert_eq!(config.default_level, Level::Info);
        assert!(!config.handle_exceptions);
        assert_eq!(config.exceptions_path(), PathBuf::from("logs/exceptions.log"));
    }

    #[test]
    fn test_exceptions_file_override() {
        let config = RegistryConfig {
            exceptions_file: Some(PathBuf::from("/tmp/panics.log")),
            ..RegistryConfig::default()
        };
        assert_eq!(config.exceptions_path(), PathBuf::from("/tmp/panics.log"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RegistryConfig = toml::from_str(r#"defaultLevel = "debug""#).unwrap();
        assert_eq!(config.default_level, Level::Debug);
        assert_eq!(config.base_log_dir, PathBuf::from("logs"));
    }
}
