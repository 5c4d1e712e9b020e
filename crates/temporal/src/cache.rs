//! Concurrent parse cache
//!
//! Day keys recur across documents (every subject reports the same
//! calendar days), so successful parses are memoised.
//!
//! # Design
//!
//! - DashMap: sharded, lock-free reads, concurrent inserts
//! - Partitioned by compiled format, then keyed by the raw value string,
//!   so a hit never allocates
//! - Only successful parses are stored; failures are recomputed each time
//! - An optional per-partition limit stops inserts once reached (no eviction).
//!   Slots are reserved atomically, so concurrent inserts never overshoot it
//!
//! The cache is an explicit component shared by `Arc`; there is no process
//! global. Results never depend on whether a value was cached.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::date::SnapshotDate;

/// Entries for one compiled format
#[derive(Debug, Default)]
struct Partition {
    entries: DashMap<String, SnapshotDate>,
    /// Occupied slots; only grows, and never past the limit
    slots: AtomicUsize,
}

impl Partition {
    fn reserve(&self, max: Option<usize>) -> bool {
        let max = max.unwrap_or(usize::MAX);
        self.slots
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < max).then_some(n + 1))
            .is_ok()
    }
}

/// Memo of successful `(format, value) → date` parses
#[derive(Debug, Default)]
pub struct ParseCache {
    partitions: DashMap<String, Arc<Partition>>,
    max_entries_per_pattern: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Point-in-time cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that fell through to a parse
    pub misses: u64,
    /// Entries currently stored across all partitions
    pub entries: usize,
}

impl ParseCache {
    /// Create an unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that stores at most `max` entries per pattern
    pub fn with_limit(max: usize) -> Self {
        Self {
            max_entries_per_pattern: Some(max),
            ..Self::default()
        }
    }

    /// Per-pattern entry limit, if any
    pub fn limit(&self) -> Option<usize> {
        self.max_entries_per_pattern
    }

    /// Look up a previously parsed value
    pub fn get(&self, format: &str, value: &str) -> Option<SnapshotDate> {
        let found = self
            .partition(format)
            .and_then(|p| p.entries.get(value).map(|entry| *entry.value()));
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Record a successful parse.
    ///
    /// Returns `false` if the partition is full and the entry was dropped.
    pub fn insert(&self, format: &str, value: &str, date: SnapshotDate) -> bool {
        let partition = match self.partition(format) {
            Some(p) => p,
            None => self
                .partitions
                .entry(format.to_string())
                .or_default()
                .value()
                .clone(),
        };

        // The entry guard serialises writers of this key; the slot counter
        // serialises new keys against the limit.
        let inserted = match partition.entries.entry(value.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(date);
                true
            }
            Entry::Vacant(vacant) => {
                if !partition.reserve(self.max_entries_per_pattern) {
                    return false;
                }
                vacant.insert(date);
                true
            }
        };
        inserted
    }

    /// Total entries across all partitions
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|p| p.value().entries.len()).sum()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries and reset counters
    pub fn clear(&self) {
        self.partitions.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    // Clone the Arc so no shard guard is held past this call
    fn partition(&self, format: &str) -> Option<Arc<Partition>> {
        self.partitions.get(format).map(|p| p.value().clone())
    }
}
