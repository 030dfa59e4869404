//! Property-based tests for the cache bound and FIFO eviction order.

use proptest::prelude::*;

use augur_cache::{text_fingerprint, Fingerprint, PutOutcome, ResultCache};
use augur_core::config::{CacheConfig, EvictionStrategy};
use augur_core::models::{
    DegradationTier, HexagramId, ScoreBreakdown, ScoredCandidate, SelectionResult,
};

fn selection() -> SelectionResult {
    SelectionResult {
        winner: ScoredCandidate {
            id: HexagramId::RECEPTIVE,
            breakdown: ScoreBreakdown::default(),
            score: 50.0,
            reasoning: String::new(),
        },
        alternates: Vec::new(),
        changing_lines: Vec::new(),
        low_confidence: false,
        default_reason: None,
        tier: DegradationTier::Full,
        degraded_stages: Vec::new(),
    }
}

proptest! {
    /// Size never exceeds capacity.
    #[test]
    fn prop_len_bounded(cap in 1usize..10, keys in prop::collection::vec("[a-z]{1,4}", 0..60)) {
        let config = CacheConfig { max_entries: cap, ..CacheConfig::default() };
        let cache = ResultCache::new(&config).unwrap();
        for k in &keys {
            cache.put(text_fingerprint(k, 200), selection());
            prop_assert!(cache.len() <= cap);
        }
    }

    /// FIFO evicts distinct keys in first-insertion order.
    #[test]
    fn prop_fifo_order(cap in 1usize..6, keys in prop::collection::vec("[a-z]{1,3}", 0..40)) {
        let config = CacheConfig {
            max_entries: cap,
            eviction: EvictionStrategy::Fifo,
            ..CacheConfig::default()
        };
        let cache = ResultCache::new(&config).unwrap();
        let mut model: std::collections::VecDeque<Fingerprint> = Default::default();

        for k in &keys {
            let key = text_fingerprint(k, 200);
            let outcome = cache.put(key.clone(), selection());
            if model.contains(&key) {
                prop_assert_eq!(outcome, PutOutcome::Replaced);
                continue;
            }
            if model.len() == cap {
                let expected = model.pop_front().unwrap();
                prop_assert_eq!(outcome, PutOutcome::InsertedWithEviction(expected));
            } else {
                prop_assert_eq!(outcome, PutOutcome::Inserted);
            }
            model.push_back(key);
        }
        for key in &model {
            prop_assert!(cache.get(key).is_some());
        }
    }
}
