use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::hexagram::HexagramId;

/// Per-factor scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub emotional_fit: f64,
    pub situational_fit: f64,
    pub keyword_alignment: f64,
    pub philosophical_compatibility: f64,
    pub classical_authenticity: f64,
}

impl ScoreBreakdown {
    /// Every factor set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            emotional_fit: value,
            situational_fit: value,
            keyword_alignment: value,
            philosophical_compatibility: value,
            classical_authenticity: value,
        }
    }

    /// (name, value) pairs in declaration order.
    pub fn factors(&self) -> [(&'static str, f64); 5] {
        [
            ("emotional_fit", self.emotional_fit),
            ("situational_fit", self.situational_fit),
            ("keyword_alignment", self.keyword_alignment),
            ("philosophical_compatibility", self.philosophical_compatibility),
            ("classical_authenticity", self.classical_authenticity),
        ]
    }
}

/// A candidate after multi-factor scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: HexagramId,
    pub breakdown: ScoreBreakdown,
    /// Weighted aggregate in [0, 100].
    pub score: f64,
    pub reasoning: String,
}
