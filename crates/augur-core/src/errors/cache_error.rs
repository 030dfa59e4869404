/// Cache bookkeeping fault. Always treated as a cache miss.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CacheError {
    #[error("cache lock poisoned")]
    LockPoisoned,

    #[error("cache index out of sync for fingerprint {fingerprint}")]
    Inconsistent { fingerprint: String },

    #[error("cache capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },
}
