// file: src/config/loader.rs
// version: 2.0.0
// guid: 2a0d94c8-f6b1-4e37-a258-9c71e3b04d65

//! Configuration file loading and environment variable substitution

use super::RegistryConfig;
use crate::error::LoggerError;
use crate::logging::LoggerOptions;
use crate::Result;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Overrides `base_log_dir`
pub const ENV_LOG_DIR: &str = "LOGGER_REGISTRY_DIR";

/// Overrides `default_level`
pub const ENV_LOG_LEVEL: &str = "LOGGER_REGISTRY_LEVEL";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load registry configuration (TOML, YAML or JSON) and apply env overrides
    pub fn load_registry_config<P: AsRef<Path>>(&self, path: P) -> Result<RegistryConfig> {
        let config: RegistryConfig = self.load(path)?;
        self.apply_env_overrides(config)
    }

    /// Load the options for one `create` call
    pub fn load_logger_options<P: AsRef<Path>>(&self, path: P) -> Result<LoggerOptions> {
        self.load(path)
    }

    fn load<T: DeserializeOwned, P: AsRef<Path>>(&self, path: P) -> Result<T> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        debug!("Loading configuration from {}", path.display());

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&expanded)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&expanded)?),
            Some("json") => Ok(serde_json::from_str(&expanded)?),
            _ => Err(LoggerError::config(format!(
                "Unsupported config format: {}",
                path.display()
            ))),
        }
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| LoggerError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(LoggerError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&self, mut config: RegistryConfig) -> Result<RegistryConfig> {
        if let Some(dir) = self.env_vars.get(ENV_LOG_DIR) {
            config.base_log_dir = dir.into();
        }

        if let Some(level) = self.env_vars.get(ENV_LOG_LEVEL) {
            config.default_level = level.parse()?;
        }

        Ok(config)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Forget an environment variable
    pub fn remove_env_var(&mut self, key: &str) {
        self.env_vars.remove(key);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
