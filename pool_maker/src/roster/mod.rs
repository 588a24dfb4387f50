//! Competitor records, roster loading and rank ordering.
//!
//! This module provides:
//! - [`Competitor`] records parsed from roster rows
//! - [`RosterReader`] for CSV rosters, skipping malformed rows
//! - [`RankingQueue`], the priority queue draws are drained from
//!
//! ## Example
//!
//! ```
//! use pool_maker::roster::{RankingQueue, RosterReader};
//!
//! let csv = "Smith, Anna, Falcons, B20\nJones, Ben, Lions, A21\n";
//! let roster = RosterReader::default().read(csv.as_bytes()).unwrap();
//!
//! let mut queue: RankingQueue = roster.competitors.into_iter().collect();
//! assert_eq!(queue.extract_min().unwrap().last, "Jones");
//! ```

pub mod errors;
pub mod models;
pub mod queue;
pub mod reader;

pub use errors::{FormatError, QueueError, RosterError, RosterResult};
pub use models::{ClubTally, Competitor, DEFAULT_UNRATED_CLASS, RankClass, RankKey};
pub use queue::RankingQueue;
pub use reader::{Roster, RosterReader, SkippedRow};
