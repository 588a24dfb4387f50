//! Pool-size classification.

use log::debug;

use super::config::SizePair;
use super::errors::{DrawError, DrawResult};

/// Whether `count` splits into `a * small + b * large` for some `a, b >= 0`
pub fn is_compatible(count: usize, pair: SizePair) -> bool {
    if pair.small == 0 || pair.large == 0 {
        return count == 0;
    }
    (0..=count / pair.large).any(|large_pools| (count - large_pools * pair.large) % pair.small == 0)
}

/// Pick the first candidate pair compatible with `count`.
///
/// # Errors
///
/// Returns [`DrawError::NoCompatibleSize`] when no candidate fits.
pub fn classify(count: usize, candidates: &[SizePair]) -> DrawResult<SizePair> {
    for &pair in candidates {
        if is_compatible(count, pair) {
            debug!("Pool sizes {pair} selected for {count} competitors");
            return Ok(pair);
        }
        debug!("Pool sizes {pair} incompatible with {count} competitors");
    }

    Err(DrawError::NoCompatibleSize {
        count,
        candidates: candidates
            .iter()
            .map(SizePair::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
