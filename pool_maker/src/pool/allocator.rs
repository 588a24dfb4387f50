//! Pool allocation.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::SizePair;
use super::errors::{DrawError, DrawResult};
use super::models::{Pool, PoolId};

/// How many pools of each size a draw uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// Size pair the plan was made for
    pub pair: SizePair,
    /// Number of pools of the small size
    pub small_count: usize,
    /// Number of pools of the large size
    pub large_count: usize,
}

impl AllocationPlan {
    /// Total number of pools
    pub fn pool_count(&self) -> usize {
        self.small_count + self.large_count
    }

    /// Sum of all pool capacities
    pub fn total_capacity(&self) -> usize {
        self.small_count * self.pair.small + self.large_count * self.pair.large
    }
}

/// Decide how many small and large pools hold exactly `count` competitors.
///
/// Precedence:
/// 1. `count` divisible by the small size: small pools only.
/// 2. `count` divisible by the large size: large pools only.
/// 3. As many large pools as possible, the remainder split into small
///    pools. When the remainder is not a multiple of the small size, one
///    large pool at a time is given up until it is.
///
/// # Errors
///
/// Returns [`DrawError::InconsistentAllocation`] if no mix of the two sizes
/// adds up to `count`.
pub fn plan_allocation(count: usize, pair: SizePair) -> DrawResult<AllocationPlan> {
    let inconsistent = || DrawError::InconsistentAllocation { count, pair };
    let plan = |small_count, large_count| AllocationPlan {
        pair,
        small_count,
        large_count,
    };

    if pair.small == 0 || pair.large == 0 {
        return if count == 0 {
            Ok(plan(0, 0))
        } else {
            Err(inconsistent())
        };
    }

    if count % pair.small == 0 {
        return Ok(plan(count / pair.small, 0));
    }
    if count % pair.large == 0 {
        return Ok(plan(0, count / pair.large));
    }

    let most_large = count / pair.large;
    (0..=most_large)
        .rev()
        .find_map(|large_count| {
            let remainder = count - large_count * pair.large;
            (remainder % pair.small == 0).then(|| plan(remainder / pair.small, large_count))
        })
        .inspect(|found| {
            if found.large_count < most_large {
                debug!(
                    "Remainder of {count} % {} does not split into pools of {}; using {} large pools",
                    pair.large, pair.small, found.large_count
                );
            }
        })
        .ok_or_else(inconsistent)
}

/// Create the pools of a plan: small pools first, then large ones.
///
/// Identities start at 1 and follow creation order.
pub fn allocate_pools(plan: &AllocationPlan) -> Vec<Pool> {
    let mut next_id = 1u32;
    let mut pools = Vec::with_capacity(plan.pool_count());

    let sizes = std::iter::repeat_n(plan.pair.small, plan.small_count)
        .chain(std::iter::repeat_n(plan.pair.large, plan.large_count));
    for capacity in sizes {
        pools.push(Pool::new(PoolId(next_id), capacity));
        next_id += 1;
    }

    debug!(
        "Allocated {} pools of {} and {} pools of {}",
        plan.small_count, plan.pair.small, plan.large_count, plan.pair.large
    );
    pools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_multiple_takes_precedence() {
        // 42 is a multiple of both 6 and 7
        let plan = plan_allocation(42, SizePair::new(6, 7)).unwrap();
        assert_eq!((plan.small_count, plan.large_count), (7, 0));
    }

    #[test]
    fn test_large_multiple() {
        let plan = plan_allocation(21, SizePair::new(6, 7)).unwrap();
        assert_eq!((plan.small_count, plan.large_count), (0, 3));
    }

    #[test]
    fn test_mixed_sizes() {
        let plan = plan_allocation(13, SizePair::new(6, 7)).unwrap();
        assert_eq!((plan.small_count, plan.large_count), (1, 1));
        assert_eq!(plan.total_capacity(), 13);
        assert_eq!(plan.pool_count(), 2);
    }

    #[test]
    fn test_mixed_sizes_gives_up_large_pools() {
        // 26 % 7 = 5, which no number of 6-pools fills; 2 * 6 + 2 * 7 does
        let plan = plan_allocation(26, SizePair::new(6, 7)).unwrap();
        assert_eq!((plan.small_count, plan.large_count), (2, 2));
        assert_eq!(plan.total_capacity(), 26);
    }

    #[test]
    fn test_inconsistent_pair() {
        let err = plan_allocation(15, SizePair::new(6, 7)).unwrap_err();
        assert!(matches!(
            err,
            DrawError::InconsistentAllocation { count: 15, .. }
        ));
    }

    #[test]
    fn test_zero_competitors() {
        let plan = plan_allocation(0, SizePair::new(6, 7)).unwrap();
        assert_eq!(plan.pool_count(), 0);
        assert!(allocate_pools(&plan).is_empty());
    }

    #[test]
    fn test_pools_small_first_with_increasing_ids() {
        let plan = AllocationPlan {
            pair: SizePair::new(5, 6),
            small_count: 2,
            large_count: 3,
        };
        let pools = allocate_pools(&plan);

        let capacities: Vec<_> = pools.iter().map(Pool::capacity).collect();
        assert_eq!(capacities, vec![5, 5, 6, 6, 6]);

        let ids: Vec<_> = pools.iter().map(|p| p.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(pools.iter().all(Pool::is_empty));
    }

    #[test]
    fn test_each_allocation_restarts_ids() {
        let plan = plan_allocation(12, SizePair::new(6, 7)).unwrap();
        let first = allocate_pools(&plan);
        let second = allocate_pools(&plan);
        assert_eq!(first[0].id(), second[0].id());
    }
}
