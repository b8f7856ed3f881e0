// file: src/plugin.rs
// version: 1.1.0
// guid: 62f0b8d4-3e19-4a7c-b05d-c8a1e94f2736

//! Registration with a host plugin system

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::exceptions;
use crate::registry::LoggerRegistry;
use std::sync::Arc;
use tracing::debug;

/// Capabilities this plugin exposes to the host
#[derive(Debug, Clone)]
pub struct PluginApi {
    pub logger: Arc<LoggerRegistry>,
}

impl PluginApi {
    /// Build the API, installing the exceptions handler when configured
    pub fn new(config: RegistryConfig) -> Result<Self> {
        if config.handle_exceptions {
            exceptions::install(config.exceptions_path())?;
        }

        Ok(Self {
            logger: Arc::new(LoggerRegistry::new(config)),
        })
    }
}

/// Build the plugin API and hand it to `register`
///
/// `register` is called exactly once, before `setup` returns.
pub fn setup<F>(config: RegistryConfig, register: F)
where
    F: FnOnce(Result<PluginApi>),
{
    debug!("start");
    let api = PluginApi::new(config);
    debug!("register");
    register(api);
}
