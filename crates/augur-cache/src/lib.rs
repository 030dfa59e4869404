//! # augur-cache
//!
//! Memoizes selections by input fingerprint so repeated inputs skip the
//! scoring pipeline. The engine receives the cache as an `Arc<ResultCache>`
//! and shares it across threads.

pub mod cache;
pub mod eviction;
pub mod fingerprint;

pub use cache::{CacheEntry, CacheStats, PutOutcome, ResultCache};
pub use eviction::{policy_for, EvictionPolicy, FifoPolicy, LruPolicy};
pub use fingerprint::{answers_fingerprint, text_fingerprint, Fingerprint};
