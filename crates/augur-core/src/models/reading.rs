use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::candidate::ScoreBreakdown;
use super::degradation::{DegradationTier, PipelineStage};
use super::trigram::Trigram;
use crate::errors::ValidationError;

/// A candidate resolved against the hexagram reference corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedCandidate {
    pub id: u8,
    pub name: String,
    pub upper_trigram: Trigram,
    pub lower_trigram: Trigram,
    pub element: Option<String>,
    pub season: Option<String>,
    pub direction: Option<String>,
    pub classical_meaning: Option<String>,
    pub modern_interpretation: Option<String>,
    pub judgment: Option<String>,
    pub image: Option<String>,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasoning: String,
    /// The corpus had no record for this id.
    pub placeholder: bool,
}

/// Reading-level quality metrics, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityMetrics {
    pub confidence: f64,
    pub authenticity: f64,
    pub philosophical_alignment: f64,
}

/// Non-fatal notes attached to a reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ReadingWarning {
    LowConfidence { score: f64, threshold: f64 },
    DefaultSelection { reason: String },
    PlaceholderRecord { id: u8 },
}

/// Per-call metadata. Excluded from idempotence comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReadingMetadata {
    pub reading_id: String,
    pub processing_time_ms: u64,
    pub cache_hit: bool,
    pub cached_at: Option<DateTime<Utc>>,
}

/// Final engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reading {
    pub winner: ResolvedCandidate,
    pub alternates: Vec<ResolvedCandidate>,
    pub changing_lines: Vec<u8>,
    pub metrics: QualityMetrics,
    pub degradation_tier: DegradationTier,
    pub degraded_stages: Vec<PipelineStage>,
    pub warnings: Vec<ReadingWarning>,
    pub error: bool,
    pub error_message: Option<String>,
    pub metadata: ReadingMetadata,
}

impl Reading {
    /// True when everything except per-call metadata matches.
    pub fn same_selection(&self, other: &Reading) -> bool {
        self.winner == other.winner
            && self.alternates == other.alternates
            && self.changing_lines == other.changing_lines
            && self.metrics == other.metrics
            && self.degradation_tier == other.degradation_tier
            && self.degraded_stages == other.degraded_stages
            && self.warnings == other.warnings
            && self.error == other.error
            && self.error_message == other.error_message
    }
}

/// Wire payload for a rejected request: `{"error": "validation", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationRejection {
    pub error: String,
    pub message: String,
}

impl From<&ValidationError> for ValidationRejection {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: "validation".to_string(),
            message: err.to_string(),
        }
    }
}
