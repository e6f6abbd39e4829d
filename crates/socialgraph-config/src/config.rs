//! Configuration sections
//!
//! Every section has a `Default` matching what the service does with no
//! configuration at all, and every field may be omitted from the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub web: WebConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Memgraph connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub max_connections: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "memgraph".to_string(),
            port: 7687,
            user: String::new(),
            password: String::new(),
            max_connections: 16,
        }
    }
}

impl StoreConfig {
    pub fn bolt_uri(&self) -> String {
        format!("bolt://{}:{}", self.host, self.port)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Served at the URL root
    pub static_dir: PathBuf,
    /// Holds `index.html` for the landing page
    pub template_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("public"),
            template_dir: PathBuf::from("public/template"),
        }
    }
}

impl WebConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How the startup load treats a statement the store rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnStatementError {
    #[default]
    Stop,
    Continue,
}

/// Statement file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub input_file: PathBuf,
    pub on_error: OnStatementError,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("data/graph.cypherl"),
            on_error: OnStatementError::Stop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub debug: bool,
    /// Explicit filter directive, wins over `debug`
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: true,
            level: None,
        }
    }
}
