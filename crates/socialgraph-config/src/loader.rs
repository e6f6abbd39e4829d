//! Layered loading: defaults < file < environment
//!
//! Command-line overrides are applied on top by the binary.

use crate::config::AppConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use tracing::debug;

pub const ENV_MEMGRAPH_HOST: &str = "MEMGRAPH_HOST";
pub const ENV_MEMGRAPH_PORT: &str = "MEMGRAPH_PORT";
pub const ENV_MEMGRAPH_USER: &str = "MEMGRAPH_USER";
pub const ENV_MEMGRAPH_PASSWORD: &str = "MEMGRAPH_PASSWORD";

impl AppConfig {
    /// Load configuration with precedence: defaults < file < env
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        debug!(path = %path.display(), "Reading config file");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override store settings from environment-style variables.
    ///
    /// `lookup` returns the value of a variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_MEMGRAPH_HOST) {
            self.store.host = host;
        }
        if let Some(port) = lookup(ENV_MEMGRAPH_PORT) {
            self.store.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_MEMGRAPH_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(user) = lookup(ENV_MEMGRAPH_USER) {
            self.store.user = user;
        }
        if let Some(password) = lookup(ENV_MEMGRAPH_PASSWORD) {
            self.store.password = password;
        }
        Ok(())
    }
}
