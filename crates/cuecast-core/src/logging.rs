//! Logging configuration
//!
//! The subscriber itself is installed by the application; this crate only
//! describes what it should look like.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Settings for the application's tracing subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when RUST_LOG is not set (trace, debug, info, warn, error, off)
    pub level: String,
    /// Colored console output
    pub ansi: bool,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a config with the given level
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Set colored output
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Parse the configured level, falling back to INFO if invalid
    pub fn parse_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or(LevelFilter::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LogConfig::default();
        assert_eq!(config.parse_level(), LevelFilter::INFO);
        assert!(config.ansi);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogConfig::new("debug").parse_level(), LevelFilter::DEBUG);
        assert_eq!(LogConfig::new("WARN").parse_level(), LevelFilter::WARN);
        assert_eq!(LogConfig::new("off").parse_level(), LevelFilter::OFF);
        assert_eq!(LogConfig::new("loud").parse_level(), LevelFilter::INFO);
    }
}
