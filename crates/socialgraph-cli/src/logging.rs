use socialgraph_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

const SERVICE_CRATES: &[&str] = &[
    "socialgraph",
    "socialgraph_cli",
    "socialgraph_core",
    "socialgraph_config",
    "socialgraph_memgraph",
    "socialgraph_web",
];

/// Filter directives for the given logging settings.
///
/// HTTP plumbing is capped at `warn` so request lines don't drown the
/// load and query logs.
pub fn directives(logging: &LoggingConfig) -> String {
    let level = match &logging.level {
        Some(level) => level.as_str(),
        None if logging.debug => "debug",
        None => "info",
    };

    let mut directives = vec!["warn".to_string()];
    directives.extend(SERVICE_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.push("tower_http=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Install the global subscriber. `RUST_LOG` wins when set.
pub fn init(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(logging)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_directives() {
        let filter = directives(&LoggingConfig::default());
        assert!(filter.contains("socialgraph_core=debug"));
        assert!(filter.contains("tower_http=warn"));
    }

    #[test]
    fn test_explicit_level_wins_over_debug() {
        let logging = LoggingConfig {
            debug: true,
            level: Some("error".to_string()),
        };
        let filter = directives(&logging);
        assert!(filter.contains("socialgraph_web=error"));
        assert!(!filter.contains("=debug"));
    }

    #[test]
    fn test_non_debug_is_info() {
        let logging = LoggingConfig {
            debug: false,
            level: None,
        };
        assert!(directives(&logging).contains("socialgraph_memgraph=info"));
    }
}
