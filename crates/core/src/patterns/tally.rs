//! Occurrence counters for pattern kinds and file categories.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::category::FileCategory;
use super::types::PatternKind;

/// Counts keyed by an ordered key.
///
/// `ranked` orders by count descending and breaks ties with the key's own
/// ordering, so two tallies with equal counts always render the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K: Ord> {
    counts: BTreeMap<K, u64>,
}

pub type PatternTally = Tally<PatternKind>;
pub type CategoryTally = Tally<FileCategory>;

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Self { counts: BTreeMap::new() }
    }
}

impl<K: Ord + Copy> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K) {
        let slot = self.counts.entry(key).or_insert(0);
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, key: K) -> u64 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn ranked(&self) -> Vec<(K, u64)> {
        let mut entries: Vec<(K, u64)> = self.counts.iter().map(|(k, v)| (*k, *v)).collect();
        // Stable sort keeps the BTreeMap key order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Ord + Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.counts.serialize(serializer)
    }
}
