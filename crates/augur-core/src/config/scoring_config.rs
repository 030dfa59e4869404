use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights for the 5 scoring factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub emotional_fit: f64,
    pub situational_fit: f64,
    pub keyword_alignment: f64,
    pub philosophical_compatibility: f64,
    pub classical_authenticity: f64,
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.emotional_fit
            + self.situational_fit
            + self.keyword_alignment
            + self.philosophical_compatibility
            + self.classical_authenticity
    }

    /// True when every weight is non-negative and the total is 1.0.
    pub fn is_normalized(&self) -> bool {
        let parts = [
            self.emotional_fit,
            self.situational_fit,
            self.keyword_alignment,
            self.philosophical_compatibility,
            self.classical_authenticity,
        ];
        parts.iter().all(|w| w.is_finite() && *w >= 0.0)
            && (self.sum() - 1.0).abs() <= defaults::WEIGHT_SUM_TOLERANCE
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            emotional_fit: defaults::DEFAULT_WEIGHT_EMOTIONAL_FIT,
            situational_fit: defaults::DEFAULT_WEIGHT_SITUATIONAL_FIT,
            keyword_alignment: defaults::DEFAULT_WEIGHT_KEYWORD_ALIGNMENT,
            philosophical_compatibility: defaults::DEFAULT_WEIGHT_PHILOSOPHICAL,
            classical_authenticity: defaults::DEFAULT_WEIGHT_AUTHENTICITY,
        }
    }
}

/// Multi-factor scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score given to a factor when the input carries no signal for it.
    pub neutral_score: f64,
    pub weights: FactorWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_score: defaults::DEFAULT_NEUTRAL_SCORE,
            weights: FactorWeights::default(),
        }
    }
}
