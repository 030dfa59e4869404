use serde::{Deserialize, Serialize};

use super::defaults;

/// Selector and metric configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Alternates reported after the winner.
    pub max_alternates: usize,
    /// Winner scores below this (0-100) carry a low-confidence warning.
    pub low_confidence_threshold: f64,
    /// Confidence reported when the candidate pool was empty.
    pub empty_pool_confidence: f64,
    /// Confidence reported for FALLBACK readings.
    pub fallback_confidence: f64,
    /// Multiplier applied to confidence for PARTIAL readings.
    pub partial_confidence_factor: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_alternates: defaults::DEFAULT_MAX_ALTERNATES,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            empty_pool_confidence: defaults::DEFAULT_EMPTY_POOL_CONFIDENCE,
            fallback_confidence: defaults::DEFAULT_FALLBACK_CONFIDENCE,
            partial_confidence_factor: defaults::DEFAULT_PARTIAL_CONFIDENCE_FACTOR,
        }
    }
}

/// Changing-line policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangingLineConfig {
    pub enabled: bool,
    /// Group-share deviation that flips an inner line (positions 1-3).
    pub inner_threshold: f64,
    /// Group-share deviation that flips an outer line (positions 4-6).
    pub outer_threshold: f64,
}

impl Default for ChangingLineConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CHANGING_LINES_ENABLED,
            inner_threshold: defaults::DEFAULT_INNER_LINE_THRESHOLD,
            outer_threshold: defaults::DEFAULT_OUTER_LINE_THRESHOLD,
        }
    }
}
