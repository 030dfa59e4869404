//! Eviction order, statistics, and concurrent access.

use std::sync::Arc;
use std::thread;

use augur_cache::{answers_fingerprint, text_fingerprint, PutOutcome, ResultCache};
use augur_core::config::{CacheConfig, EvictionStrategy};
use augur_core::models::{
    Answer, DegradationTier, HexagramId, QuestionGroup, ScoreBreakdown, ScoredCandidate,
    SelectionResult,
};

fn selection(id: u32) -> SelectionResult {
    SelectionResult {
        winner: ScoredCandidate {
            id: HexagramId::new(id).unwrap(),
            breakdown: ScoreBreakdown::default(),
            score: 55.0,
            reasoning: format!("hexagram {id}"),
        },
        alternates: Vec::new(),
        changing_lines: vec![2, 5],
        low_confidence: false,
        default_reason: None,
        tier: DegradationTier::Full,
        degraded_stages: Vec::new(),
    }
}

fn config(max_entries: usize, eviction: EvictionStrategy) -> CacheConfig {
    CacheConfig {
        max_entries,
        eviction,
        ..CacheConfig::default()
    }
}

#[test]
fn fifo_drops_oldest_insert() {
    let cache = ResultCache::new(&config(3, EvictionStrategy::Fifo)).unwrap();
    for (i, text) in ["one", "two", "three"].iter().enumerate() {
        cache.put(text_fingerprint(text, 200), selection(i as u32 + 1));
    }
    // Reads do not refresh FIFO order.
    assert!(cache.get(&text_fingerprint("one", 200)).is_some());
    let outcome = cache.put(text_fingerprint("four", 200), selection(4));
    assert_eq!(
        outcome,
        PutOutcome::InsertedWithEviction(text_fingerprint("one", 200))
    );
    assert_eq!(cache.len(), 3);
    assert!(cache.get(&text_fingerprint("one", 200)).is_none());
}

#[test]
fn lru_drops_least_recently_read() {
    let cache = ResultCache::new(&config(3, EvictionStrategy::Lru)).unwrap();
    for (i, text) in ["one", "two", "three"].iter().enumerate() {
        cache.put(text_fingerprint(text, 200), selection(i as u32 + 1));
    }
    assert!(cache.get(&text_fingerprint("one", 200)).is_some());
    let outcome = cache.put(text_fingerprint("four", 200), selection(4));
    assert_eq!(
        outcome,
        PutOutcome::InsertedWithEviction(text_fingerprint("two", 200))
    );
    assert!(cache.get(&text_fingerprint("one", 200)).is_some());
}

#[test]
fn hit_returns_stored_selection() {
    let cache = ResultCache::new(&CacheConfig::default()).unwrap();
    let answers = vec![
        Answer::new("q1", QuestionGroup::A, 1),
        Answer::new("q2", QuestionGroup::C, 3),
    ];
    let key = answers_fingerprint(&answers);
    cache.put(key.clone(), selection(11));

    let entry = cache.get(&key).unwrap();
    assert_eq!(entry.selection, selection(11));
    assert!(entry.cached_at <= chrono::Utc::now());

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.insertions, 1);
}

#[test]
fn concurrent_access_respects_bound() {
    let cache = Arc::new(ResultCache::new(&config(16, EvictionStrategy::Fifo)).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50u32 {
                    let key = text_fingerprint(&format!("thread {t} input {i}"), 200);
                    cache.put(key.clone(), selection(i % 64 + 1));
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(cache.len(), 16);
    let stats = cache.stats();
    assert_eq!(stats.insertions, 400);
    assert_eq!(stats.evictions, 400 - 16);
    assert_eq!(stats.hits + stats.misses, 400);
    assert_eq!(stats.faults, 0);
}
