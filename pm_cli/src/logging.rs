//! Logging configuration.
//!
//! Log output goes to stderr so reports on stdout stay machine readable.
//! The level is controlled by the `RUST_LOG` environment variable and
//! defaults to `info`.

use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Build the logger used by the binary
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_target(false);
    builder
}

/// Initialize logging
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = builder().try_init();
}
