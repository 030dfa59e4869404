//! Pluggable eviction order for [`ResultCache`](crate::ResultCache).

use std::collections::VecDeque;
use std::fmt::Debug;

use augur_core::config::EvictionStrategy;

use crate::fingerprint::Fingerprint;

/// Tracks key order and nominates the next victim. Called with the cache
/// lock held, so implementations need no synchronization of their own.
pub trait EvictionPolicy: Send + Debug {
    /// A new key was stored.
    fn on_insert(&mut self, key: &Fingerprint);

    /// An existing key was read or overwritten.
    fn on_access(&mut self, key: &Fingerprint);

    /// Next key to drop, removed from the policy's own bookkeeping.
    fn evict(&mut self) -> Option<Fingerprint>;

    fn clear(&mut self);

    /// Keys currently tracked.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn name(&self) -> &'static str;
}

/// Build the policy named by configuration.
pub fn policy_for(strategy: EvictionStrategy) -> Box<dyn EvictionPolicy> {
    match strategy {
        EvictionStrategy::Fifo => Box::new(FifoPolicy::default()),
        EvictionStrategy::Lru => Box::new(LruPolicy::default()),
    }
}

/// Oldest insertion goes first. Reads and overwrites keep position.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    order: VecDeque<Fingerprint>,
}

impl EvictionPolicy for FifoPolicy {
    fn on_insert(&mut self, key: &Fingerprint) {
        self.order.push_back(key.clone());
    }

    fn on_access(&mut self, _key: &Fingerprint) {}

    fn evict(&mut self) -> Option<Fingerprint> {
        self.order.pop_front()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

/// Least recently used goes first.
#[derive(Debug, Default)]
pub struct LruPolicy {
    // Front is least recent. Linear scans are fine at cache sizes in the hundreds.
    order: VecDeque<Fingerprint>,
}

impl EvictionPolicy for LruPolicy {
    fn on_insert(&mut self, key: &Fingerprint) {
        self.order.push_back(key.clone());
    }

    fn on_access(&mut self, key: &Fingerprint) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn evict(&mut self) -> Option<Fingerprint> {
        self.order.pop_front()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
