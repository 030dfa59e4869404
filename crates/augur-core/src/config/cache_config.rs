use serde::{Deserialize, Serialize};

use super::defaults;

/// Which entry the result cache drops on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionStrategy {
    /// Oldest inserted entry goes first. Reads do not refresh position.
    #[default]
    Fifo,
    /// Least recently read or written entry goes first.
    Lru,
}

/// Result cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Maximum number of cached selections.
    pub max_entries: usize,
    /// Normalized text is truncated to this many characters before hashing.
    pub fingerprint_prefix_chars: usize,
    pub eviction: EvictionStrategy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            fingerprint_prefix_chars: defaults::DEFAULT_FINGERPRINT_PREFIX_CHARS,
            eviction: EvictionStrategy::default(),
        }
    }
}
