//! Engine configuration, loadable from TOML. Every section falls back to
//! the values in [`defaults`].

mod cache_config;
mod candidate_config;
pub mod defaults;
mod observability_config;
mod scoring_config;
mod selection_config;
mod text_config;

pub use cache_config::{CacheConfig, EvictionStrategy};
pub use candidate_config::CandidateConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{FactorWeights, ScoringConfig};
pub use selection_config::{ChangingLineConfig, SelectionConfig};
pub use text_config::TextConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AugurError, AugurResult};

/// Top-level configuration for the selection engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AugurConfig {
    pub text: TextConfig,
    pub candidates: CandidateConfig,
    pub scoring: ScoringConfig,
    pub selection: SelectionConfig,
    pub changing_lines: ChangingLineConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl AugurConfig {
    /// Parse and validate a TOML document. Missing sections keep their defaults.
    pub fn from_toml(source: &str) -> AugurResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| AugurError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> AugurResult<()> {
        let w = &self.scoring.weights;
        if !w.is_normalized() {
            return Err(AugurError::ConfigError(format!(
                "scoring weights must be non-negative and sum to 1.0, got {:.6}",
                w.sum()
            )));
        }
        if !(0.0..=100.0).contains(&self.scoring.neutral_score) {
            return Err(AugurError::ConfigError(format!(
                "neutral_score must be within 0..=100, got {}",
                self.scoring.neutral_score
            )));
        }
        if self.candidates.max_candidates == 0 {
            return Err(AugurError::ConfigError(
                "max_candidates must be at least 1".into(),
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(AugurError::ConfigError(
                "cache.max_entries must be at least 1".into(),
            ));
        }
        if self.text.min_chars == 0 {
            return Err(AugurError::ConfigError(
                "text.min_chars must be at least 1".into(),
            ));
        }
        if self.text.max_analyzer_workers == 0 {
            return Err(AugurError::ConfigError(
                "text.max_analyzer_workers must be at least 1".into(),
            ));
        }
        if !(self.text.relevance_saturation > 0.0) {
            return Err(AugurError::ConfigError(
                "text.relevance_saturation must be positive".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.selection.low_confidence_threshold) {
            return Err(AugurError::ConfigError(format!(
                "low_confidence_threshold must be within 0..=100, got {}",
                self.selection.low_confidence_threshold
            )));
        }
        for (name, value) in [
            ("empty_pool_confidence", self.selection.empty_pool_confidence),
            ("fallback_confidence", self.selection.fallback_confidence),
            (
                "partial_confidence_factor",
                self.selection.partial_confidence_factor,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AugurError::ConfigError(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("inner_threshold", self.changing_lines.inner_threshold),
            ("outer_threshold", self.changing_lines.outer_threshold),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(AugurError::ConfigError(format!(
                    "changing_lines.{name} must be within (0, 1), got {value}"
                )));
            }
        }
        Ok(())
    }
}
