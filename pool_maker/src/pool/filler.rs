//! Serpentine pool filling.
//!
//! Competitors are taken in rank order and dealt across the pools forward,
//! then backward, then forward again. Each end pool is visited twice in a
//! row, once per direction, so strength evens out across pools.

use log::{debug, warn};

use super::models::{Admission, ClubQuotas, Pool};
use crate::roster::{Competitor, RankingQueue};

/// Sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Position of a boustrophedon sweep over `len` pools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerpentineCursor {
    index: usize,
    direction: Direction,
    len: usize,
}

impl SerpentineCursor {
    /// Cursor at the first pool, moving forward
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move to the next position.
    ///
    /// At an end facing outwards the direction flips and the index stays.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        let at_end = match self.direction {
            Direction::Forward => self.index + 1 == self.len,
            Direction::Backward => self.index == 0,
        };

        if at_end {
            self.direction = self.direction.reversed();
        } else {
            match self.direction {
                Direction::Forward => self.index += 1,
                Direction::Backward => self.index -= 1,
            }
        }
    }
}

impl Iterator for SerpentineCursor {
    type Item = usize;

    /// Current index, then advance. Never ends unless there are no pools.
    fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let index = self.index;
        self.advance();
        Some(index)
    }
}

/// Deals competitors into pools along a serpentine sweep
#[derive(Debug)]
pub struct SerpentineFiller<'a> {
    pools: &'a mut [Pool],
    quotas: &'a ClubQuotas,
    cursor: SerpentineCursor,
}

impl<'a> SerpentineFiller<'a> {
    pub fn new(pools: &'a mut [Pool], quotas: &'a ClubQuotas) -> Self {
        let cursor = SerpentineCursor::new(pools.len());
        Self {
            pools,
            quotas,
            cursor,
        }
    }

    /// Place one competitor.
    ///
    /// Every attempt moves the cursor, successful or not. Pools that
    /// already refused this competitor, such as the one revisited at a
    /// turnaround, are stepped over without counting as a try. Once every
    /// pool has refused the competitor is given back.
    pub fn place(&mut self, competitor: Competitor) -> Option<Competitor> {
        let mut competitor = competitor;
        let mut refused = vec![false; self.pools.len()];
        let mut tried = 0;

        while tried < self.pools.len() {
            let index = self.cursor.index();
            self.cursor.advance();
            if refused[index] {
                continue;
            }
            refused[index] = true;
            tried += 1;

            match self.pools[index].admit(competitor, self.quotas) {
                Admission::Admitted => return None,
                Admission::Rejected {
                    reason,
                    competitor: rejected,
                } => {
                    debug!(
                        "Pool {} rejected {} {}: {reason}",
                        self.pools[index].id(),
                        rejected.first,
                        rejected.last
                    );
                    competitor = rejected;
                }
            }
        }

        Some(competitor)
    }

    /// Drain `queue` into the pools, returning the competitors that did not fit
    pub fn fill(&mut self, queue: &mut RankingQueue) -> Vec<Competitor> {
        let mut overflow = Vec::new();

        for competitor in queue.drain_ordered() {
            if let Some(unplaced) = self.place(competitor) {
                warn!(
                    "No pool accepted {} {} ({}, {})",
                    unplaced.first,
                    unplaced.last,
                    unplaced.club,
                    unplaced.rating()
                );
                overflow.push(unplaced);
            }
        }

        overflow
    }
}

/// Fill `pools` from `queue` in rank order; returns the overflow
pub fn fill_pools(
    pools: &mut [Pool],
    quotas: &ClubQuotas,
    queue: &mut RankingQueue,
) -> Vec<Competitor> {
    SerpentineFiller::new(pools, quotas).fill(queue)
}
