use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// Hard cap on the deduplicated candidate pool.
    pub max_candidates: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
        }
    }
}
