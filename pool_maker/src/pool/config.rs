//! Draw configuration models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::roster::DEFAULT_UNRATED_CLASS;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid pool size pair {0:?}: expected SMALL:LARGE")]
    InvalidSizePair(String),

    #[error("Invalid configuration for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Candidate pair of pool sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizePair {
    pub small: usize,
    pub large: usize,
}

impl SizePair {
    pub const fn new(small: usize, large: usize) -> Self {
        Self { small, large }
    }
}

impl std::fmt::Display for SizePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.small, self.large)
    }
}

impl FromStr for SizePair {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSizePair(s.to_string());
        let (small, large) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            small: small.trim().parse().map_err(|_| invalid())?,
            large: large.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Parse a comma-separated list of pairs such as `"6:7,7:8"`
pub fn parse_size_pairs(s: &str) -> Result<Vec<SizePair>, ConfigError> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Pool size pairs tried when nothing else is configured, in priority order
pub const DEFAULT_SIZE_PAIRS: [SizePair; 3] = [
    SizePair::new(6, 7),
    SizePair::new(7, 8),
    SizePair::new(5, 6),
];

/// Draw configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Candidate size pairs, tried in order
    pub size_pairs: Vec<SizePair>,

    /// Rank class of unrated competitors (default: `U`)
    pub unrated_class: char,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            size_pairs: DEFAULT_SIZE_PAIRS.to_vec(),
            unrated_class: DEFAULT_UNRATED_CLASS,
        }
    }
}

impl DrawConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size_pairs.is_empty() {
            return Err(ConfigError::Invalid {
                field: "size_pairs".to_string(),
                reason: "At least one pool size pair is required".to_string(),
            });
        }

        for pair in &self.size_pairs {
            if pair.small == 0 {
                return Err(ConfigError::Invalid {
                    field: "size_pairs".to_string(),
                    reason: format!("Pool sizes must be greater than 0 (got {pair})"),
                });
            }

            if pair.large < pair.small {
                return Err(ConfigError::Invalid {
                    field: "size_pairs".to_string(),
                    reason: format!("Large size must not be below small size (got {pair})"),
                });
            }
        }

        if self.unrated_class.is_whitespace() || self.unrated_class == ',' {
            return Err(ConfigError::Invalid {
                field: "unrated_class".to_string(),
                reason: format!("{:?} cannot start a rating", self.unrated_class),
            });
        }

        Ok(())
    }
}
