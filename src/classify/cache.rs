//! Concurrent classification cache.
//!
//! Classification is a pure function of the raw token, so results are
//! memoized per token and never invalidated. The map is a sharded
//! [`DashMap`]: render calls touching unrelated tokens never wait on each
//! other.
//!
//! An optional capacity bounds memory for deployments that generate class
//! names at runtime. Recency is a per-entry stamp from a shared atomic clock.
//! Once the map grows past capacity, one scan evicts the oldest entries in a
//! batch, down to the low watermark (capacity minus a tenth, at least one
//! slot below the overflow). The next tenth of misses then insert without
//! scanning, so eviction costs O(1) amortized per miss.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use crate::classify::classifier::classify;
use crate::classify::group::Classification;

#[derive(Debug)]
struct Entry {
    value: Classification,
    last_used: AtomicU64,
}

/// Hit/miss/eviction counters and current size of a [`ClassCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Memoizes [`classify`] per raw token.
#[derive(Debug)]
pub struct ClassCache {
    entries: DashMap<Box<str>, Entry>,
    capacity: Option<usize>,
    clock: AtomicU64,
    evicting: AtomicBool,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Default for ClassCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ClassCache {
    /// A cache that keeps every classification it has ever seen.
    pub fn unbounded() -> Self {
        Self::with_capacity(None)
    }

    /// A cache holding at most `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self::with_capacity(Some(capacity))
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
            clock: AtomicU64::new(0),
            evicting: AtomicBool::new(false),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Classify `token`, reusing a cached result when there is one.
    pub fn get_or_classify(&self, token: &str) -> Classification {
        if let Some(entry) = self.entries.get(token) {
            if self.capacity.is_some() {
                entry.last_used.store(self.tick(), Ordering::Relaxed);
            }
            self.hits.fetch_add(1, Ordering::Relaxed);
            return entry.value.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = classify(token);
        self.entries.insert(
            token.into(),
            Entry {
                value: value.clone(),
                last_used: AtomicU64::new(self.tick()),
            },
        );
        self.evict_overflow();
        value
    }

    fn evict_overflow(&self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        if self.entries.len() <= capacity {
            return;
        }
        // One scanner at a time; concurrent misses insert and move on.
        if self
            .evicting
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return;
        }

        let watermark = low_watermark(capacity);
        let mut stamps: Vec<(u64, Box<str>)> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.value().last_used.load(Ordering::Relaxed),
                    entry.key().clone(),
                )
            })
            .collect();
        let excess = stamps.len().saturating_sub(watermark);
        if excess < stamps.len() {
            stamps.select_nth_unstable_by_key(excess, |(stamp, _)| *stamp);
        }
        stamps.truncate(excess);

        let mut evicted = 0u64;
        for (_, key) in stamps {
            if self.entries.remove(&key).is_some() {
                evicted += 1;
            }
        }
        self.evictions.fetch_add(evicted, Ordering::Relaxed);
        self.evicting.store(false, Ordering::Release);
        debug!(evicted, capacity, watermark, "evicted least recently used classifications");
    }

    /// Configured bound, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of cached classifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `token` currently has a cached classification.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Drop every cached entry and reset the counters.
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

/// Size an overflowing cache is trimmed back to, a tenth below capacity.
/// Capacities under 10 trim by a single entry.
fn low_watermark(capacity: usize) -> usize {
    capacity - capacity / 10
}
