// file: src/registry.rs
// version: 1.0.0
// guid: 4d8a0f6e-b172-4c39-a5e8-0f9d2c6b71a3

//! Name-keyed cache of loggers

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::logging::{Logger, LoggerOptions};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Creates loggers and hands out the cached instance for known names
///
/// Entries are never replaced or removed: the first configuration seen for a
/// name wins for the life of the registry.
#[derive(Debug)]
pub struct LoggerRegistry {
    config: RegistryConfig,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Return the logger cached under `options.name`, or build one
    ///
    /// Unnamed loggers are built fresh on every call and never cached.
    pub fn create(&self, options: LoggerOptions) -> Result<Arc<Logger>> {
        debug!("create logger");

        let name = match options.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Ok(Arc::new(Logger::generate(options, &self.config)?)),
        };

        // Held across generation so concurrent first requests build once.
        let mut loggers = self.lock();
        if let Some(existing) = loggers.get(&name) {
            debug!("get logger {}", name);
            return Ok(Arc::clone(existing));
        }

        let logger = Arc::new(Logger::generate(options, &self.config)?);
        loggers.insert(name, Arc::clone(&logger));
        Ok(logger)
    }

    /// Cached logger for `name`, without building one
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Names of all cached loggers, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are insert-only, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
