use serde::{Deserialize, Serialize};

use super::defaults;

/// Free-text signal extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Minimum trimmed length in codepoints. Shorter input is rejected.
    pub min_chars: usize,
    /// Local tokenizer drops tokens shorter than this.
    pub min_token_len: usize,
    /// Upper bound on a linguistic analyzer call (milliseconds).
    pub analyzer_timeout_ms: u64,
    /// Analyzer calls allowed to run at once, counting calls that already
    /// timed out but have not returned.
    pub max_analyzer_workers: usize,
    /// Match count at which a category's relevance saturates at 1.0.
    pub relevance_saturation: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_chars: defaults::DEFAULT_MIN_TEXT_CHARS,
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            analyzer_timeout_ms: defaults::DEFAULT_ANALYZER_TIMEOUT_MS,
            max_analyzer_workers: defaults::DEFAULT_MAX_ANALYZER_WORKERS,
            relevance_saturation: defaults::DEFAULT_RELEVANCE_SATURATION,
        }
    }
}
