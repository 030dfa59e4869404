use serde::{Deserialize, Serialize};

use super::candidate::ScoredCandidate;
use super::degradation::{DegradationTier, PipelineStage};

/// Winner, alternates, and changing lines before corpus resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub winner: ScoredCandidate,
    /// Strongest first.
    pub alternates: Vec<ScoredCandidate>,
    /// Line positions in 1..=6, ascending, unique.
    pub changing_lines: Vec<u8>,
    /// Winner scored below the configured threshold.
    pub low_confidence: bool,
    /// Set when the pool was empty and the default winner was used.
    pub default_reason: Option<String>,
    pub tier: DegradationTier,
    pub degraded_stages: Vec<PipelineStage>,
}

impl SelectionResult {
    pub fn is_default(&self) -> bool {
        self.default_reason.is_some()
    }
}
