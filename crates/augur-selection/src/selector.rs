//! Ranking of scored candidates into a winner and alternates.

use std::cmp::Ordering;

use augur_core::config::SelectionConfig;
use augur_core::errors::ComputationError;
use augur_core::models::{HexagramId, ScoreBreakdown, ScoredCandidate};

/// Reason attached to the default winner when the pool is empty.
pub const EMPTY_POOL_REASON: &str =
    "no candidate matched the input; defaulting to The Receptive (2)";

/// Winner and alternates before changing lines and tier are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub winner: ScoredCandidate,
    pub alternates: Vec<ScoredCandidate>,
    pub low_confidence: bool,
    pub default_reason: Option<String>,
}

impl Ranking {
    /// Winner minus best alternate, when there is an alternate.
    pub fn margin(&self) -> Option<f64> {
        self.alternates
            .first()
            .map(|alt| self.winner.score - alt.score)
    }
}

/// Highest score first; ties go to the lower id.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone)]
pub struct Selector {
    max_alternates: usize,
    low_confidence_threshold: f64,
}

impl Selector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            max_alternates: config.max_alternates,
            low_confidence_threshold: config.low_confidence_threshold,
        }
    }

    pub fn rank(&self, mut scored: Vec<ScoredCandidate>) -> Result<Ranking, ComputationError> {
        if let Some(bad) = scored.iter().find(|c| !c.score.is_finite()) {
            return Err(ComputationError::NonFiniteScore {
                id: bad.id.get(),
                factor: "aggregate".into(),
            });
        }
        if scored.is_empty() {
            tracing::debug!("empty candidate pool; using default winner");
            return Ok(Self::default_ranking());
        }

        scored.sort_by(rank_order);
        let mut ranked = scored.into_iter();
        let Some(winner) = ranked.next() else {
            return Ok(Self::default_ranking());
        };
        let alternates: Vec<ScoredCandidate> = ranked.take(self.max_alternates).collect();
        let low_confidence = winner.score < self.low_confidence_threshold;

        Ok(Ranking {
            winner,
            alternates,
            low_confidence,
            default_reason: None,
        })
    }

    fn default_ranking() -> Ranking {
        Ranking {
            winner: ScoredCandidate {
                id: HexagramId::RECEPTIVE,
                breakdown: ScoreBreakdown::default(),
                score: 0.0,
                reasoning: EMPTY_POOL_REASON.to_string(),
            },
            alternates: Vec::new(),
            low_confidence: false,
            default_reason: Some(EMPTY_POOL_REASON.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            id: HexagramId::new(id).unwrap(),
            breakdown: ScoreBreakdown::uniform(score),
            score,
            reasoning: String::new(),
        }
    }

    fn selector() -> Selector {
        Selector::new(&SelectionConfig::default())
    }

    #[test]
    fn sorts_descending_with_id_tiebreak() {
        let ranking = selector()
            .rank(vec![
                candidate(10, 40.0),
                candidate(7, 80.0),
                candidate(3, 80.0),
                candidate(5, 60.0),
                candidate(9, 10.0),
            ])
            .unwrap();
        assert_eq!(ranking.winner.id.get(), 3);
        let alts: Vec<u8> = ranking.alternates.iter().map(|c| c.id.get()).collect();
        assert_eq!(alts, vec![7, 5, 10]);
        assert_eq!(ranking.margin(), Some(0.0));
        assert!(!ranking.low_confidence);
    }

    #[test]
    fn empty_pool_uses_receptive() {
        let ranking = selector().rank(Vec::new()).unwrap();
        assert_eq!(ranking.winner.id, HexagramId::RECEPTIVE);
        assert!(ranking.alternates.is_empty());
        assert_eq!(ranking.default_reason.as_deref(), Some(EMPTY_POOL_REASON));
        assert_eq!(ranking.margin(), None);
    }

    #[test]
    fn low_scores_are_flagged() {
        let ranking = selector().rank(vec![candidate(1, 29.9)]).unwrap();
        assert!(ranking.low_confidence);
        let ranking = selector().rank(vec![candidate(1, 30.0)]).unwrap();
        assert!(!ranking.low_confidence);
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let err = selector()
            .rank(vec![candidate(1, 50.0), candidate(4, f64::NAN)])
            .unwrap_err();
        assert!(matches!(err, ComputationError::NonFiniteScore { id: 4, .. }));
    }
}
