//! Draw error types.

use thiserror::Error;

use super::config::{ConfigError, SizePair};

/// Draw errors
#[derive(Debug, Error)]
pub enum DrawError {
    /// No candidate pair can split the competitors exactly
    #[error("No compatible pool sizes for {count} competitors (tried {candidates})")]
    NoCompatibleSize { count: usize, candidates: String },

    /// Allocator could not realise the chosen pair
    #[error("Cannot allocate {count} competitors into pools of {pair}")]
    InconsistentAllocation { count: usize, pair: SizePair },

    /// Invalid draw configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;
