//! # Pool Maker
//!
//! Seeds ranked competitors into fixed-capacity pools for a competition
//! while capping how many members of one club can meet in the same pool.
//!
//! A draw runs in four steps:
//!
//! - **Classify**: pick the first candidate pair of pool sizes that splits
//!   the field exactly
//! - **Allocate**: create the small and large pools of that split
//! - **Quota**: allow each club at most `ceil(members / pools)` per pool
//! - **Fill**: deal competitors in rank order along a serpentine sweep,
//!   skipping pools that are full or at quota
//!
//! Competitors no pool accepts are reported as overflow rather than lost.
//!
//! ## Core Modules
//!
//! - [`roster`]: Competitor records, CSV roster loading and rank ordering
//! - [`pool`]: Pools, size classification, allocation and filling
//!
//! ## Example
//!
//! ```
//! use pool_maker::{DrawConfig, PoolMaker};
//!
//! let maker = PoolMaker::new(DrawConfig::default()).unwrap();
//! let roster = maker.reader().read("".as_bytes()).unwrap();
//! let draw = maker.draw(&roster).unwrap();
//! assert_eq!(draw.pool_count(), 0);
//! ```

/// Competitor records, roster loading and the ranking queue.
pub mod roster;
pub use roster::{ClubTally, Competitor, RankClass, RankingQueue, Roster, RosterReader};

/// Pool allocation engine.
pub mod pool;
pub use pool::{Draw, DrawConfig, DrawError, DrawResult, Pool, PoolMaker, SizePair};
