//! Command-line configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration. Command-line flags take precedence over the environment,
//! which takes precedence over built-in defaults.

use pool_maker::pool::{DrawConfig, parse_size_pairs};
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid {
                var: "POOL_OUTPUT_FORMAT".to_string(),
                reason: format!("Unknown format {other:?}, expected text or json"),
            }),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--sizes`
    pub sizes: Option<String>,
    /// `--unrated`
    pub unrated: Option<String>,
    /// `--format`
    pub format: Option<String>,
}

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Engine configuration
    pub draw: DrawConfig,
    /// How reports are rendered
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from the command line, applied on top
    ///
    /// # Errors
    ///
    /// Returns error if a value cannot be parsed
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment
    pub fn from_lookup<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut draw = DrawConfig::default();

        if let Some(sizes) = overrides.sizes.or_else(|| lookup("POOL_SIZE_PAIRS")) {
            draw.size_pairs = parse_size_pairs(&sizes).map_err(|e| ConfigError::Invalid {
                var: "POOL_SIZE_PAIRS".to_string(),
                reason: e.to_string(),
            })?;
        }

        if let Some(unrated) = overrides.unrated.or_else(|| lookup("POOL_UNRATED_CLASS")) {
            draw.unrated_class = parse_class(&unrated)?;
        }

        let format = match overrides.format.or_else(|| lookup("POOL_OUTPUT_FORMAT")) {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig { draw, format })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.draw.validate().map_err(|e| ConfigError::Invalid {
            var: "POOL_SIZE_PAIRS".to_string(),
            reason: e.to_string(),
        })
    }
}

fn parse_class(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(class), None) => Ok(class),
        _ => Err(ConfigError::Invalid {
            var: "POOL_UNRATED_CLASS".to_string(),
            reason: format!("Must be a single character, got {value:?}"),
        }),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
