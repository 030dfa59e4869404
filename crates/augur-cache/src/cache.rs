//! Bounded selection cache shared across request threads.
//!
//! Every operation takes the single mutex. Faults (a poisoned lock or an
//! index that disagrees with the eviction policy) are counted, logged, and
//! reported to callers as a plain miss; they never fail a request.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use augur_core::config::CacheConfig;
use augur_core::errors::CacheError;
use augur_core::models::{DegradationTier, SelectionResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eviction::{policy_for, EvictionPolicy};
use crate::fingerprint::Fingerprint;

/// A stored selection and when it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub selection: SelectionResult,
    pub cached_at: DateTime<Utc>,
}

/// Point-in-time counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub faults: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// Outcome of a [`ResultCache::put`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    /// Stored, and the named entry was dropped to make room.
    InsertedWithEviction(Fingerprint),
    /// Existing entry overwritten in place.
    Replaced,
    /// Selection was not FULL tier.
    Skipped,
    /// Lock or bookkeeping fault; nothing stored.
    Faulted,
}

#[derive(Debug)]
struct CacheInner {
    entries: HashMap<Fingerprint, CacheEntry>,
    policy: Box<dyn EvictionPolicy>,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    evictions: AtomicU64,
    faults: AtomicU64,
}

/// Bounded fingerprint → selection map with pluggable eviction.
pub struct ResultCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    counters: Counters,
}

impl ResultCache {
    /// Build from configuration. Capacity must be at least one.
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        Self::with_policy(config.max_entries, policy_for(config.eviction))
    }

    pub fn with_policy(
        capacity: usize,
        policy: Box<dyn EvictionPolicy>,
    ) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity { capacity });
        }
        Ok(Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::with_capacity(capacity),
                policy,
            }),
            capacity,
            counters: Counters::default(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a fingerprint. Faults count as a miss.
    pub fn get(&self, key: &Fingerprint) -> Option<CacheEntry> {
        match self.try_get(key) {
            Ok(Some(entry)) => {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            Ok(None) => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                self.record_fault(&e);
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a FULL-tier selection, evicting as needed.
    pub fn put(&self, key: Fingerprint, selection: SelectionResult) -> PutOutcome {
        if selection.tier != DegradationTier::Full {
            return PutOutcome::Skipped;
        }
        match self.try_put(key, selection) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.record_fault(&e);
                PutOutcome::Faulted
            }
        }
    }

    /// Entries currently stored. Zero if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Also recovers a poisoned lock.
    pub fn clear(&self) {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.inner.clear_poison();
                poisoned.into_inner()
            }
        };
        inner.entries.clear();
        inner.policy.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            insertions: self.counters.insertions.load(Ordering::Relaxed),
            evictions: self.counters.evictions.load(Ordering::Relaxed),
            faults: self.counters.faults.load(Ordering::Relaxed),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CacheInner>, CacheError> {
        self.inner.lock().map_err(|_| CacheError::LockPoisoned)
    }

    fn try_get(&self, key: &Fingerprint) -> Result<Option<CacheEntry>, CacheError> {
        let mut inner = self.lock()?;
        let Some(entry) = inner.entries.get(key).cloned() else {
            return Ok(None);
        };
        inner.policy.on_access(key);
        Ok(Some(entry))
    }

    fn try_put(
        &self,
        key: Fingerprint,
        selection: SelectionResult,
    ) -> Result<PutOutcome, CacheError> {
        let mut inner = self.lock()?;
        let entry = CacheEntry {
            selection,
            cached_at: Utc::now(),
        };

        if let Some(slot) = inner.entries.get_mut(&key) {
            *slot = entry;
            inner.policy.on_access(&key);
            return Ok(PutOutcome::Replaced);
        }

        let mut evicted = None;
        if inner.entries.len() >= self.capacity {
            let victim = inner.policy.evict().ok_or_else(|| CacheError::Inconsistent {
                fingerprint: key.to_string(),
            })?;
            if inner.entries.remove(&victim).is_none() {
                return Err(CacheError::Inconsistent {
                    fingerprint: victim.to_string(),
                });
            }
            self.counters.evictions.fetch_add(1, Ordering::Relaxed);
            evicted = Some(victim);
        }

        inner.policy.on_insert(&key);
        inner.entries.insert(key, entry);
        self.counters.insertions.fetch_add(1, Ordering::Relaxed);
        Ok(match evicted {
            Some(victim) => PutOutcome::InsertedWithEviction(victim),
            None => PutOutcome::Inserted,
        })
    }

    fn record_fault(&self, error: &CacheError) {
        self.counters.faults.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(
            event = "cache_fault",
            error = %error,
            "cache fault treated as a miss"
        );
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
