//! Deterministic five-factor scoring.
//!
//! Signal-driven factors use weighted rank agreement: every detected signal
//! with weight `w` credits a candidate `w * rank_weight(position)` when the
//! candidate appears in that signal's association list, where
//! `rank_weight(p) = max(0.4, 1 - 0.15 * p)`. The factor is
//! `100 * credited / total_weight`, or the neutral score when nothing was
//! detected.

use augur_core::config::{FactorWeights, ScoringConfig};
use augur_core::constants::SCORE_MAX;
use augur_core::errors::ComputationError;
use augur_core::models::{HexagramId, ScoreBreakdown, ScoredCandidate, SignalFeatures};
use augur_core::traits::{ICandidateScorer, IHexagramCorpus};
use augur_corpus::associations::{self, AssociationKey};

const RANK_DECAY: f64 = 0.15;
const RANK_FLOOR: f64 = 0.4;

/// Credit for appearing at `position` in an association list.
pub fn rank_weight(position: usize) -> f64 {
    (1.0 - RANK_DECAY * position as f64).max(RANK_FLOOR)
}

/// Weighted rank agreement in [0, 100], or `None` when no signal carries weight.
pub fn rank_agreement(
    signals: impl IntoIterator<Item = (AssociationKey, f64)>,
    id: HexagramId,
) -> Option<f64> {
    let mut total = 0.0;
    let mut earned = 0.0;
    for (key, weight) in signals {
        if !(weight.is_finite() && weight > 0.0) {
            continue;
        }
        total += weight;
        if let Some(position) = associations::position(key, id) {
            earned += weight * rank_weight(position);
        }
    }
    (total > 0.0).then(|| SCORE_MAX * earned / total)
}

#[derive(Debug, Clone)]
pub struct MultiFactorScorer {
    neutral: f64,
    weights: FactorWeights,
}

impl MultiFactorScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            neutral: config.neutral_score,
            weights: config.weights,
        }
    }

    /// Score a single candidate.
    pub fn score(
        &self,
        id: HexagramId,
        features: &SignalFeatures,
        corpus: &dyn IHexagramCorpus,
    ) -> Result<ScoredCandidate, ComputationError> {
        let record = corpus.get(id);

        let emotional_fit = rank_agreement(
            features
                .emotions
                .iter()
                .map(|w| (AssociationKey::from(w.item), w.weight)),
            id,
        )
        .unwrap_or(self.neutral);

        let situational_fit = rank_agreement(
            features
                .situations
                .iter()
                .map(|w| (AssociationKey::from(w.item), w.weight)),
            id,
        )
        .unwrap_or(self.neutral);

        // Themes, personas, and the dominant group all act as keywords.
        let keywords = features
            .themes
            .iter()
            .map(|w| (AssociationKey::from(w.item), w.weight))
            .chain(
                features
                    .personas
                    .iter()
                    .map(|p| (AssociationKey::from(p.persona), p.strength)),
            )
            .chain(features.dominant_group.map(|g| (AssociationKey::from(g), 1.0)));
        let keyword_alignment = rank_agreement(keywords, id).unwrap_or(self.neutral);

        let philosophical_compatibility = match features.plurality_tolerance {
            Some(tolerance) => SCORE_MAX * (1.0 - (tolerance - id.plurality()).abs()),
            None => self.neutral,
        };

        let classical_authenticity = record
            .as_ref()
            .map(|r| SCORE_MAX * r.completeness())
            .unwrap_or(0.0);

        let breakdown = ScoreBreakdown {
            emotional_fit,
            situational_fit,
            keyword_alignment,
            philosophical_compatibility,
            classical_authenticity,
        };
        for (factor, value) in breakdown.factors() {
            if !value.is_finite() {
                return Err(ComputationError::NonFiniteScore {
                    id: id.get(),
                    factor: factor.to_string(),
                });
            }
        }

        let w = &self.weights;
        let aggregate = w.emotional_fit * emotional_fit
            + w.situational_fit * situational_fit
            + w.keyword_alignment * keyword_alignment
            + w.philosophical_compatibility * philosophical_compatibility
            + w.classical_authenticity * classical_authenticity;
        if !aggregate.is_finite() {
            return Err(ComputationError::NonFiniteScore {
                id: id.get(),
                factor: "aggregate".into(),
            });
        }
        let score = aggregate.clamp(0.0, SCORE_MAX);

        let name = record
            .map(|r| r.name)
            .unwrap_or_else(|| format!("Hexagram {id}"));
        let (strongest, strongest_value) = breakdown
            .factors()
            .into_iter()
            .fold(("", f64::NEG_INFINITY), |best, (f, v)| {
                if v > best.1 {
                    (f, v)
                } else {
                    best
                }
            });
        let reasoning = format!(
            "{name} (#{id}) scored {score:.1}; strongest factor {strongest} at {strongest_value:.0}"
        );

        Ok(ScoredCandidate {
            id,
            breakdown,
            score,
            reasoning,
        })
    }
}

impl ICandidateScorer for MultiFactorScorer {
    fn score_all(
        &self,
        candidates: &[HexagramId],
        features: &SignalFeatures,
        corpus: &dyn IHexagramCorpus,
    ) -> Result<Vec<ScoredCandidate>, ComputationError> {
        candidates
            .iter()
            .map(|id| self.score(*id, features, corpus))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::models::{EmotionalState, SignalOrigin, Theme, Weighted};
    use augur_corpus::{InMemoryCorpus, StaticCorpus};

    fn id(n: u32) -> HexagramId {
        HexagramId::new(n).unwrap()
    }

    fn scorer() -> MultiFactorScorer {
        MultiFactorScorer::new(&ScoringConfig::default())
    }

    #[test]
    fn rank_weight_decays_to_floor() {
        assert_eq!(rank_weight(0), 1.0);
        assert!((rank_weight(2) - 0.7).abs() < 1e-12);
        assert!((rank_weight(4) - 0.4).abs() < 1e-12);
        assert_eq!(rank_weight(5), 0.4);
        assert_eq!(rank_weight(10), 0.4);
    }

    #[test]
    fn no_signal_scores_neutral() {
        let f = SignalFeatures::empty(SignalOrigin::Text);
        let c = scorer().score(id(1), &f, &StaticCorpus::new()).unwrap();
        assert_eq!(c.breakdown.emotional_fit, 50.0);
        assert_eq!(c.breakdown.situational_fit, 50.0);
        assert_eq!(c.breakdown.keyword_alignment, 50.0);
        assert_eq!(c.breakdown.philosophical_compatibility, 50.0);
        assert!((c.breakdown.classical_authenticity - 100.0).abs() < 1e-9);
        assert!((c.score - 55.0).abs() < 1e-9);
    }

    #[test]
    fn rank_agreement_is_weighted() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.emotions.push(Weighted::new(EmotionalState::Anxiety, 1.0));
        f.emotions.push(Weighted::new(EmotionalState::Hope, 0.5));
        // 29 leads anxiety and is absent from hope.
        let c = scorer().score(id(29), &f, &StaticCorpus::new()).unwrap();
        assert!((c.breakdown.emotional_fit - 100.0 / 1.5).abs() < 1e-9);
    }

    #[test]
    fn philosophical_fit_compares_plurality() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.plurality_tolerance = Some(1.0);
        let peace = scorer().score(id(11), &f, &StaticCorpus::new()).unwrap();
        let creative = scorer().score(id(1), &f, &StaticCorpus::new()).unwrap();
        assert!((peace.breakdown.philosophical_compatibility - 100.0).abs() < 1e-9);
        assert!(creative.breakdown.philosophical_compatibility.abs() < 1e-9);
    }

    #[test]
    fn missing_record_has_zero_authenticity() {
        let f = SignalFeatures::empty(SignalOrigin::Text);
        let c = scorer().score(id(7), &f, &InMemoryCorpus::new()).unwrap();
        assert_eq!(c.breakdown.classical_authenticity, 0.0);
        assert!(c.reasoning.starts_with("Hexagram 7 (#7)"));
    }

    #[test]
    fn non_finite_weight_is_an_error() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.plurality_tolerance = Some(f64::NAN);
        let err = scorer().score(id(3), &f, &StaticCorpus::new()).unwrap_err();
        assert_eq!(
            err,
            ComputationError::NonFiniteScore {
                id: 3,
                factor: "philosophical_compatibility".into()
            }
        );
    }

    #[test]
    fn reasoning_names_hexagram_and_score() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.themes.push(Weighted::new(Theme::Change, 1.0));
        let c = scorer().score(id(49), &f, &StaticCorpus::new()).unwrap();
        assert!(c.reasoning.contains("Revolution"));
        assert!(c.reasoning.contains(&format!("{:.1}", c.score)));
    }
}
