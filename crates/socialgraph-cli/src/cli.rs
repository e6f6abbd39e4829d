use clap::{Parser, ValueEnum};
use socialgraph_config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages (default in debug mode)
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Every override is optional so that an absent flag leaves the file and
/// environment values in place.
#[derive(Debug, Parser)]
#[command(name = "socialgraph")]
#[command(about = "socialgraph - load a Cypher file into Memgraph and serve the friendship graph")]
#[command(version)]
pub struct Cli {
    /// Host address (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// App port (default 5000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding index.html (default public/template)
    #[arg(long = "template-folder")]
    pub template_folder: Option<PathBuf>,

    /// Directory served at the URL root (default public)
    #[arg(long = "static-folder")]
    pub static_folder: Option<PathBuf>,

    /// Graph input file (default data/graph.cypherl)
    #[arg(long = "path-to-input-file")]
    pub path_to_input_file: Option<PathBuf>,

    /// Debug logging for the service crates
    #[arg(long)]
    pub debug: bool,

    /// Config file path (TOML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// Overrides --debug and the config file
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Memgraph host (overrides MEMGRAPH_HOST)
    #[arg(long)]
    pub memgraph_host: Option<String>,

    /// Memgraph Bolt port (overrides MEMGRAPH_PORT)
    #[arg(long)]
    pub memgraph_port: Option<u16>,

    /// Skip the startup load and serve whatever the store already holds
    #[arg(long = "no-load")]
    pub no_load: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.web.host = host.clone();
        }
        if let Some(port) = self.port {
            config.web.port = port;
        }
        if let Some(dir) = &self.template_folder {
            config.web.template_dir = dir.clone();
        }
        if let Some(dir) = &self.static_folder {
            config.web.static_dir = dir.clone();
        }
        if let Some(path) = &self.path_to_input_file {
            config.data.input_file = path.clone();
        }
        if self.debug {
            config.logging.debug = true;
        }
        if let Some(level) = self.log_level {
            config.logging.level = Some(LevelFilter::from(level).to_string().to_lowercase());
        }
        if let Some(host) = &self.memgraph_host {
            config.store.host = host.clone();
        }
        if let Some(port) = self.memgraph_port {
            config.store.port = port;
        }
    }
}
