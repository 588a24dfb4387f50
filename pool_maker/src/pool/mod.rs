//! Pool allocation engine.
//!
//! This module turns a ranked roster into filled pools:
//! - Pool-size classification against a prioritized list of size pairs
//! - Allocation of small and large pools that add up to the roster size
//! - Per-club quotas, `ceil(population / pool count)`
//! - Serpentine filling in rank order under capacity and quota limits
//!
//! ## Example
//!
//! ```
//! use pool_maker::pool::{DrawConfig, PoolMaker};
//!
//! let csv = "\
//! Smith, Anna, Falcons, A19
//! Jones, Ben, Lions, B20
//! Brown, Cara, Falcons, B21
//! Green, Dan, , C18
//! White, Eve, Lions, C19
//! Black, Finn, Falcons, U
//! ";
//!
//! let config = DrawConfig {
//!     size_pairs: vec!["3:4".parse().unwrap()],
//!     ..Default::default()
//! };
//! let maker = PoolMaker::new(config).unwrap();
//! let roster = maker.reader().read(csv.as_bytes()).unwrap();
//! let draw = maker.draw(&roster).unwrap();
//!
//! assert_eq!(draw.pool_count(), 2);
//! assert!(draw.is_complete());
//! ```

pub mod allocator;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod filler;
pub mod maker;
pub mod models;

pub use allocator::{AllocationPlan, allocate_pools, plan_allocation};
pub use classifier::{classify, is_compatible};
pub use config::{ConfigError, DEFAULT_SIZE_PAIRS, DrawConfig, SizePair, parse_size_pairs};
pub use errors::{DrawError, DrawResult};
pub use filler::{Direction, SerpentineCursor, SerpentineFiller, fill_pools};
pub use maker::{Draw, PoolMaker};
pub use models::{Admission, ClubQuotas, Pool, PoolId, RejectReason};
