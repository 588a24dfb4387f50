//! Draw orchestration: classification, allocation, quotas and filling.

use log::info;
use serde::Serialize;

use super::allocator::{AllocationPlan, allocate_pools, plan_allocation};
use super::classifier::classify;
use super::config::DrawConfig;
use super::errors::DrawResult;
use super::filler::fill_pools;
use super::models::{ClubQuotas, Pool};
use crate::roster::{ClubTally, Competitor, RankingQueue, Roster, RosterReader};

/// Outcome of one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    /// Pool sizes and counts used
    pub plan: AllocationPlan,
    /// Per-club quota applied to every pool
    pub quotas: ClubQuotas,
    /// Filled pools, small ones first
    pub pools: Vec<Pool>,
    /// Competitors no pool accepted
    pub overflow: Vec<Competitor>,
}

impl Draw {
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Competitors seated in a pool
    pub fn placed_count(&self) -> usize {
        self.pools.iter().map(Pool::len).sum()
    }

    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    /// All competitors of the draw, placed or not
    pub fn competitor_count(&self) -> usize {
        self.placed_count() + self.overflow_count()
    }

    /// Whether everybody got a pool
    pub fn is_complete(&self) -> bool {
        self.overflow.is_empty()
    }
}

/// Runs draws with a fixed configuration.
///
/// Each draw owns its queue, pools and quotas; nothing is shared between
/// calls.
#[derive(Debug, Clone)]
pub struct PoolMaker {
    config: DrawConfig,
}

impl PoolMaker {
    /// Create a pool maker
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: DrawConfig) -> DrawResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Reader matching this configuration's unrated class
    pub fn reader(&self) -> RosterReader {
        RosterReader::new(self.config.unrated_class)
    }

    /// Draw pools for a loaded roster
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NoCompatibleSize`](super::DrawError::NoCompatibleSize)
    /// when no configured pair fits the roster, or
    /// [`DrawError::InconsistentAllocation`](super::DrawError::InconsistentAllocation)
    /// when the chosen pair cannot be realised.
    pub fn draw(&self, roster: &Roster) -> DrawResult<Draw> {
        let queue: RankingQueue = roster.competitors.iter().cloned().collect();
        self.run(queue, &roster.clubs)
    }

    /// Draw pools for competitors that did not come from a roster file
    pub fn draw_competitors<I>(&self, competitors: I) -> DrawResult<Draw>
    where
        I: IntoIterator<Item = Competitor>,
    {
        let competitors: Vec<Competitor> = competitors.into_iter().collect();
        let populations: ClubTally = competitors.iter().collect();
        self.run(competitors.into_iter().collect(), &populations)
    }

    fn run(&self, mut queue: RankingQueue, populations: &ClubTally) -> DrawResult<Draw> {
        let count = queue.len();
        let pair = classify(count, &self.config.size_pairs)?;
        let plan = plan_allocation(count, pair)?;
        let mut pools = allocate_pools(&plan);
        let quotas = ClubQuotas::compute(populations, pools.len());

        let overflow = fill_pools(&mut pools, &quotas, &mut queue);

        let draw = Draw {
            plan,
            quotas,
            pools,
            overflow,
        };
        info!(
            "Drew {} competitors into {} pools of {pair}: {} placed, {} unplaced",
            count,
            draw.pool_count(),
            draw.placed_count(),
            draw.overflow_count()
        );
        Ok(draw)
    }
}
