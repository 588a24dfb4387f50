//! Minimum-priority queue of competitors ordered by ranking key.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::errors::QueueError;
use super::models::{Competitor, RankKey};

/// Heap entry. Equal keys fall back to load order.
#[derive(Debug)]
struct Entry {
    key: RankKey,
    seq: u64,
    competitor: Competitor,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Ranking priority queue.
///
/// The highest-priority competitor (lowest [`RankKey`]) is extracted first.
/// Competitors with identical keys come out in the order they were inserted.
#[derive(Debug, Default)]
pub struct RankingQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl RankingQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a competitor
    pub fn insert(&mut self, competitor: Competitor) {
        let entry = Entry {
            key: competitor.rank_key(),
            seq: self.next_seq,
            competitor,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the highest-priority competitor.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] when nothing is left.
    pub fn extract_min(&mut self) -> Result<Competitor, QueueError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.competitor)
            .ok_or(QueueError::Empty)
    }

    /// Highest-priority competitor without removing it
    pub fn peek(&self) -> Option<&Competitor> {
        self.heap.peek().map(|Reverse(entry)| &entry.competitor)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain the queue in priority order
    pub fn drain_ordered(&mut self) -> impl Iterator<Item = Competitor> + '_ {
        std::iter::from_fn(move || self.extract_min().ok())
    }
}

impl FromIterator<Competitor> for RankingQueue {
    fn from_iter<I: IntoIterator<Item = Competitor>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl Extend<Competitor> for RankingQueue {
    fn extend<I: IntoIterator<Item = Competitor>>(&mut self, iter: I) {
        for competitor in iter {
            self.insert(competitor);
        }
    }
}
