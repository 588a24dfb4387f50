//! Pool data models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::roster::{ClubTally, Competitor};

/// Pool identity, assigned in creation order starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(pub u32);

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of members a single pool may take from each club.
///
/// Unaffiliated competitors are never limited, and clubs missing from the
/// table are unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubQuotas(BTreeMap<String, usize>);

impl ClubQuotas {
    /// Quota per club: `ceil(population / pool_count)`.
    ///
    /// Returns an empty table when there are no pools.
    pub fn compute(populations: &ClubTally, pool_count: usize) -> Self {
        if pool_count == 0 {
            return Self::default();
        }
        Self(
            populations
                .iter()
                .filter(|(club, _)| !club.is_empty())
                .map(|(club, population)| (club.to_string(), population.div_ceil(pool_count)))
                .collect(),
        )
    }

    /// Quota for `club`, if it has one
    pub fn limit(&self, club: &str) -> Option<usize> {
        if club.is_empty() {
            return None;
        }
        self.0.get(club).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clubs and quotas in club-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(club, &quota)| (club.as_str(), quota))
    }
}

impl FromIterator<(String, usize)> for ClubQuotas {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Why a pool turned a competitor away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Pool is at capacity
    PoolFull,
    /// Pool already holds the club's quota
    ClubQuotaReached,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::PoolFull => write!(f, "pool full"),
            RejectReason::ClubQuotaReached => write!(f, "club quota reached"),
        }
    }
}

/// Outcome of an admission attempt.
///
/// A rejected competitor is handed back so the caller can try elsewhere.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected {
        reason: RejectReason,
        competitor: Competitor,
    },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Fixed-capacity group of competitors.
///
/// Members are kept in admission order and the club tally always matches
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    id: PoolId,
    capacity: usize,
    members: Vec<Competitor>,
    clubs: ClubTally,
}

impl Pool {
    /// Create an empty pool
    pub fn new(id: PoolId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            members: Vec::with_capacity(capacity),
            clubs: ClubTally::new(),
        }
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Members in admission order
    pub fn members(&self) -> &[Competitor] {
        &self.members
    }

    /// Members per club
    pub fn clubs(&self) -> &ClubTally {
        &self.clubs
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// Free places left
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }

    /// Reason `competitor` would be rejected, if any
    pub fn check(&self, competitor: &Competitor, quotas: &ClubQuotas) -> Option<RejectReason> {
        if self.is_full() {
            return Some(RejectReason::PoolFull);
        }

        let present = self.clubs.count(&competitor.club);
        match quotas.limit(&competitor.club) {
            Some(quota) if present > 0 && present >= quota => {
                Some(RejectReason::ClubQuotaReached)
            }
            _ => None,
        }
    }

    /// Try to add `competitor` to the pool
    pub fn admit(&mut self, competitor: Competitor, quotas: &ClubQuotas) -> Admission {
        if let Some(reason) = self.check(&competitor, quotas) {
            return Admission::Rejected { reason, competitor };
        }

        self.clubs.record(&competitor.club);
        self.members.push(competitor);
        Admission::Admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::DEFAULT_UNRATED_CLASS;

    fn competitor(club: &str) -> Competitor {
        Competitor::parse("Doe", "Sam", club, "C20", DEFAULT_UNRATED_CLASS).unwrap()
    }

    fn quotas(entries: &[(&str, usize)]) -> ClubQuotas {
        entries
            .iter()
            .map(|(club, quota)| (club.to_string(), *quota))
            .collect()
    }

    #[test]
    fn test_admit_until_capacity() {
        let mut pool = Pool::new(PoolId(1), 2);
        let quotas = ClubQuotas::default();

        assert!(pool.admit(competitor("A"), &quotas).is_admitted());
        assert!(pool.admit(competitor("B"), &quotas).is_admitted());
        assert!(pool.is_full());
        assert_eq!(pool.remaining(), 0);

        match pool.admit(competitor("C"), &quotas) {
            Admission::Rejected { reason, competitor } => {
                assert_eq!(reason, RejectReason::PoolFull);
                assert_eq!(competitor.club, "C");
            }
            Admission::Admitted => panic!("full pool admitted a competitor"),
        }
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_club_quota_enforced() {
        let mut pool = Pool::new(PoolId(1), 5);
        let quotas = quotas(&[("A", 2)]);

        assert!(pool.admit(competitor("A"), &quotas).is_admitted());
        assert!(pool.admit(competitor("A"), &quotas).is_admitted());
        assert_eq!(
            pool.check(&competitor("A"), &quotas),
            Some(RejectReason::ClubQuotaReached)
        );
        assert!(!pool.admit(competitor("A"), &quotas).is_admitted());
        assert!(pool.admit(competitor("B"), &quotas).is_admitted());
        assert_eq!(pool.clubs().count("A"), 2);
    }

    #[test]
    fn test_unaffiliated_exempt_from_quota() {
        let mut pool = Pool::new(PoolId(1), 4);
        let quotas = quotas(&[("", 1)]);

        for _ in 0..4 {
            assert!(pool.admit(competitor(""), &quotas).is_admitted());
        }
        assert_eq!(pool.clubs().count(""), 4);
    }

    #[test]
    fn test_first_member_of_club_always_fits() {
        let mut pool = Pool::new(PoolId(1), 3);
        let quotas = quotas(&[("A", 0)]);

        assert!(pool.admit(competitor("A"), &quotas).is_admitted());
        assert!(!pool.admit(competitor("A"), &quotas).is_admitted());
    }

    #[test]
    fn test_club_tally_matches_members() {
        let mut pool = Pool::new(PoolId(7), 6);
        let quotas = ClubQuotas::default();
        for club in ["A", "B", "A", "", "C"] {
            assert!(pool.admit(competitor(club), &quotas).is_admitted());
        }

        assert_eq!(pool.id(), PoolId(7));
        assert_eq!(pool.clubs().total(), pool.len());
        assert_eq!(pool.members()[2].club, "A");
    }

    #[test]
    fn test_quotas_round_up() {
        let mut tally = ClubTally::new();
        for club in ["A", "B", "B", "B", "B", "", ""] {
            tally.record(club);
        }

        let quotas = ClubQuotas::compute(&tally, 3);
        assert_eq!(quotas.limit("A"), Some(1));
        assert_eq!(quotas.limit("B"), Some(2));
        assert_eq!(quotas.limit(""), None);
        assert_eq!(quotas.limit("Z"), None);
        assert_eq!(quotas.len(), 2);
    }

    #[test]
    fn test_quotas_without_pools_are_empty() {
        let mut tally = ClubTally::new();
        tally.record("A");
        assert!(ClubQuotas::compute(&tally, 0).is_empty());
    }

    #[test]
    fn test_pool_serializes_members_with_matching_tally() {
        let mut pool = Pool::new(PoolId(3), 2);
        let quotas = ClubQuotas::default();
        assert!(pool.admit(competitor("A"), &quotas).is_admitted());
        assert!(pool.admit(competitor(""), &quotas).is_admitted());

        let json = serde_json::to_value(&pool).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["capacity"], 2);
        assert_eq!(json["members"].as_array().unwrap().len(), 2);
        assert_eq!(json["clubs"]["A"], 1);
        assert_eq!(json["clubs"][""], 1);
    }
}
