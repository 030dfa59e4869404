use crate::errors::ComputationError;
use crate::models::{HexagramId, ScoredCandidate, SignalFeatures};

use super::IHexagramCorpus;

/// Produces the candidate pool from a feature summary.
pub trait ICandidateGenerator: Send + Sync {
    /// Deduplicated ids in insertion order. Empty when nothing matched.
    fn generate(&self, features: &SignalFeatures) -> Result<Vec<HexagramId>, ComputationError>;
}

/// Scores every candidate in a pool.
pub trait ICandidateScorer: Send + Sync {
    fn score_all(
        &self,
        candidates: &[HexagramId],
        features: &SignalFeatures,
        corpus: &dyn IHexagramCorpus,
    ) -> Result<Vec<ScoredCandidate>, ComputationError>;
}
