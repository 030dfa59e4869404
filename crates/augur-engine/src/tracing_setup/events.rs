//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use augur_core::models::DegradationTier;

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a completed reading.
pub fn reading_completed(
    reading_id: &str,
    winner: u8,
    tier: DegradationTier,
    cache_hit: bool,
    elapsed_ms: u64,
) {
    tracing::info!(
        event = "reading_completed",
        reading_id = %reading_id,
        winner = winner,
        tier = ?tier,
        cache_hit = cache_hit,
        elapsed_ms = elapsed_ms,
        "reading completed"
    );
}

/// Log an input rejected at validation.
pub fn input_rejected(path: &str, reason: &str) {
    tracing::info!(
        event = "input_rejected",
        path = %path,
        reason = %reason,
        "input rejected"
    );
}

/// Log a cache eviction caused by a store.
pub fn cache_evicted(fingerprint: &str, cache_len: usize) {
    tracing::debug!(
        event = "cache_evicted",
        fingerprint = %fingerprint,
        cache_len = cache_len,
        "cache entry evicted"
    );
}
