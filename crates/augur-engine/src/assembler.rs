//! Output assembly: corpus resolution, quality metrics, warnings.

use std::panic::{self, AssertUnwindSafe};

use augur_core::config::SelectionConfig;
use augur_core::constants::SCORE_MAX;
use augur_core::errors::ComputationError;
use augur_core::models::{
    DegradationTier, HexagramId, HexagramRecord, PipelineStage, QualityMetrics, Reading,
    ReadingMetadata, ReadingWarning, ResolvedCandidate, ScoreBreakdown, ScoredCandidate,
    SelectionResult,
};
use augur_core::traits::IHexagramCorpus;

use crate::degradation::StageFailure;

/// Weight of the winner's own score in confidence.
const SCORE_SHARE: f64 = 0.7;
/// Weight of the winner's lead over the best alternate.
const MARGIN_SHARE: f64 = 0.3;
/// Lead (in score points) that earns the full margin share.
const FULL_MARGIN: f64 = 20.0;

/// Confidence before the tier factor:
/// `0.7 · score/100 + 0.3 · min(1, margin/20)`, clamped to [0, 1].
/// A missing alternate counts as a full margin.
pub fn base_confidence(winner_score: f64, margin: Option<f64>) -> f64 {
    let margin = margin.unwrap_or(FULL_MARGIN).max(0.0);
    let value = SCORE_SHARE * (winner_score / SCORE_MAX)
        + MARGIN_SHARE * (margin / FULL_MARGIN).min(1.0);
    value.clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct Assembler {
    low_confidence_threshold: f64,
    empty_pool_confidence: f64,
    fallback_confidence: f64,
    partial_confidence_factor: f64,
}

impl Assembler {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            low_confidence_threshold: config.low_confidence_threshold,
            empty_pool_confidence: config.empty_pool_confidence,
            fallback_confidence: config.fallback_confidence,
            partial_confidence_factor: config.partial_confidence_factor,
        }
    }

    fn tier_factor(&self, tier: DegradationTier) -> f64 {
        match tier {
            DegradationTier::Full => 1.0,
            DegradationTier::Partial => self.partial_confidence_factor,
            DegradationTier::Fallback => 0.0,
        }
    }

    pub fn metrics(&self, selection: &SelectionResult) -> QualityMetrics {
        let winner = &selection.winner;
        let confidence = if selection.is_default() {
            self.empty_pool_confidence
        } else {
            let margin = selection.alternates.first().map(|alt| winner.score - alt.score);
            base_confidence(winner.score, margin) * self.tier_factor(selection.tier)
        };
        QualityMetrics {
            confidence,
            authenticity: winner.breakdown.classical_authenticity / SCORE_MAX,
            philosophical_alignment: winner.breakdown.philosophical_compatibility / SCORE_MAX,
        }
    }

    /// Resolve a selection into a reading. Non-finite metrics fail assembly.
    pub fn assemble(
        &self,
        selection: &SelectionResult,
        corpus: &dyn IHexagramCorpus,
        metadata: ReadingMetadata,
    ) -> Result<Reading, ComputationError> {
        let mut warnings = Vec::new();

        let winner = resolve(&selection.winner, corpus, &mut warnings);
        let alternates: Vec<ResolvedCandidate> = selection
            .alternates
            .iter()
            .map(|c| resolve(c, corpus, &mut warnings))
            .collect();

        let metrics = self.metrics(selection);
        for (name, value) in [
            ("confidence", metrics.confidence),
            ("authenticity", metrics.authenticity),
            ("philosophical_alignment", metrics.philosophical_alignment),
        ] {
            if !value.is_finite() {
                return Err(ComputationError::AssemblyFailed {
                    reason: format!("{name} is not finite"),
                });
            }
        }

        if selection.low_confidence {
            warnings.insert(
                0,
                ReadingWarning::LowConfidence {
                    score: selection.winner.score,
                    threshold: self.low_confidence_threshold,
                },
            );
        }
        if let Some(reason) = &selection.default_reason {
            warnings.insert(
                0,
                ReadingWarning::DefaultSelection {
                    reason: reason.clone(),
                },
            );
        }

        Ok(Reading {
            winner,
            alternates,
            changing_lines: selection.changing_lines.clone(),
            metrics,
            degradation_tier: selection.tier,
            degraded_stages: selection.degraded_stages.clone(),
            warnings,
            error: false,
            error_message: None,
            metadata,
        })
    }

    /// The fixed reading returned when a required stage failed. Never fails.
    pub fn fallback(
        &self,
        corpus: &dyn IHexagramCorpus,
        failure: &StageFailure,
        mut degraded_stages: Vec<PipelineStage>,
        metadata: ReadingMetadata,
    ) -> Reading {
        let id = HexagramId::RECEPTIVE;
        let (record, placeholder) = panic::catch_unwind(AssertUnwindSafe(|| corpus.resolve(id)))
            .unwrap_or_else(|_| (HexagramRecord::placeholder(id), true));

        let message = failure.to_string();
        let candidate = ScoredCandidate {
            id,
            breakdown: ScoreBreakdown::default(),
            score: 0.0,
            reasoning: format!("default reading after {} failure", failure.stage),
        };
        if !degraded_stages.contains(&failure.stage) {
            degraded_stages.push(failure.stage);
        }

        let mut warnings = vec![ReadingWarning::DefaultSelection {
            reason: message.clone(),
        }];
        if placeholder {
            warnings.push(ReadingWarning::PlaceholderRecord { id: id.get() });
        }

        Reading {
            winner: to_resolved(&candidate, record, placeholder),
            alternates: Vec::new(),
            changing_lines: Vec::new(),
            metrics: QualityMetrics {
                confidence: self.fallback_confidence,
                authenticity: 0.0,
                philosophical_alignment: 0.0,
            },
            degradation_tier: DegradationTier::Fallback,
            degraded_stages,
            warnings,
            error: true,
            error_message: Some(message),
            metadata,
        }
    }
}

fn resolve(
    candidate: &ScoredCandidate,
    corpus: &dyn IHexagramCorpus,
    warnings: &mut Vec<ReadingWarning>,
) -> ResolvedCandidate {
    let (record, placeholder) = corpus.resolve(candidate.id);
    if placeholder {
        warnings.push(ReadingWarning::PlaceholderRecord {
            id: candidate.id.get(),
        });
    }
    to_resolved(candidate, record, placeholder)
}

fn to_resolved(
    candidate: &ScoredCandidate,
    record: HexagramRecord,
    placeholder: bool,
) -> ResolvedCandidate {
    ResolvedCandidate {
        id: candidate.id.get(),
        name: record.name,
        upper_trigram: record.upper,
        lower_trigram: record.lower,
        element: record.element,
        season: record.season,
        direction: record.direction,
        classical_meaning: record.classical_meaning,
        modern_interpretation: record.modern_interpretation,
        judgment: record.judgment,
        image: record.image,
        score: candidate.score,
        breakdown: candidate.breakdown,
        reasoning: candidate.reasoning.clone(),
        placeholder,
    }
}
