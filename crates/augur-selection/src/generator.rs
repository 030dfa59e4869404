//! Candidate pool construction from the static association tables.

use std::collections::HashSet;

use augur_core::config::CandidateConfig;
use augur_core::errors::ComputationError;
use augur_core::models::{HexagramId, SignalFeatures};
use augur_core::traits::ICandidateGenerator;
use augur_corpus::associations::{self, AssociationKey};

/// Merges four sources into a deduplicated, insertion-ordered, capped pool:
///
/// 1. dominant group, then dominant personas
/// 2. themes, strongest first
/// 3. emotional states, strongest first
/// 4. situational states, strongest first
///
/// A first pass takes up to `max(cap / 4, 1)` new ids from each source so
/// every source with matches is represented; a second pass fills any
/// remaining room in source order.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    max_candidates: usize,
}

impl CandidateGenerator {
    pub fn new(config: &CandidateConfig) -> Self {
        Self {
            max_candidates: config.max_candidates,
        }
    }

    fn sources(features: &SignalFeatures) -> [Vec<HexagramId>; 4] {
        let mut identity: Vec<AssociationKey> = Vec::new();
        if let Some(group) = features.dominant_group {
            identity.push(group.into());
        }
        identity.extend(features.personas.iter().map(|p| AssociationKey::from(p.persona)));

        [
            expand(identity),
            expand(features.themes.iter().map(|w| AssociationKey::from(w.item))),
            expand(features.emotions.iter().map(|w| AssociationKey::from(w.item))),
            expand(features.situations.iter().map(|w| AssociationKey::from(w.item))),
        ]
    }
}

fn expand(keys: impl IntoIterator<Item = AssociationKey>) -> Vec<HexagramId> {
    keys.into_iter().flat_map(associations::hexagrams).collect()
}

impl ICandidateGenerator for CandidateGenerator {
    fn generate(&self, features: &SignalFeatures) -> Result<Vec<HexagramId>, ComputationError> {
        let cap = self.max_candidates;
        if cap == 0 {
            return Err(ComputationError::GenerationFailed {
                reason: "candidate cap is zero".into(),
            });
        }
        let quota = (cap / 4).max(1);

        let mut cursors: Vec<std::vec::IntoIter<HexagramId>> = Self::sources(features)
            .into_iter()
            .map(Vec::into_iter)
            .collect();
        let mut pool: Vec<HexagramId> = Vec::with_capacity(cap);
        let mut seen: HashSet<HexagramId> = HashSet::with_capacity(cap);

        for cursor in &mut cursors {
            let mut added = 0;
            while added < quota && pool.len() < cap {
                let Some(id) = cursor.next() else { break };
                if seen.insert(id) {
                    pool.push(id);
                    added += 1;
                }
            }
        }

        for cursor in &mut cursors {
            while pool.len() < cap {
                let Some(id) = cursor.next() else { break };
                if seen.insert(id) {
                    pool.push(id);
                }
            }
        }

        tracing::debug!(pool = pool.len(), cap, "candidate pool generated");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::models::{
        EmotionalState, QuestionGroup, SignalOrigin, SituationalState, Theme, Weighted,
    };

    fn generator(cap: usize) -> CandidateGenerator {
        CandidateGenerator::new(&CandidateConfig {
            max_candidates: cap,
        })
    }

    fn ids(raw: &[u8]) -> Vec<HexagramId> {
        raw.iter()
            .map(|&i| HexagramId::new(u32::from(i)).unwrap())
            .collect()
    }

    #[test]
    fn no_signal_means_empty_pool() {
        let pool = generator(12)
            .generate(&SignalFeatures::empty(SignalOrigin::Text))
            .unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn single_source_fills_in_order() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.themes.push(Weighted::new(Theme::Change, 1.0));
        let pool = generator(12).generate(&f).unwrap();
        assert_eq!(pool, ids(&[49, 3, 64, 63, 24, 18]));
    }

    #[test]
    fn every_source_is_represented_before_filling() {
        let mut f = SignalFeatures::empty(SignalOrigin::Answers);
        f.dominant_group = Some(QuestionGroup::A);
        f.themes.push(Weighted::new(Theme::Change, 1.0));
        f.emotions.push(Weighted::new(EmotionalState::Hope, 1.0));
        f.situations.push(Weighted::new(SituationalState::Health, 1.0));
        let pool = generator(8).generate(&f).unwrap();
        // Quota 2 per source fills the cap exactly.
        assert_eq!(pool, ids(&[1, 34, 49, 3, 11, 24, 27, 48]));
    }

    #[test]
    fn duplicates_are_skipped() {
        let mut f = SignalFeatures::empty(SignalOrigin::Text);
        f.themes.push(Weighted::new(Theme::Change, 1.0));
        f.situations.push(Weighted::new(SituationalState::Transition, 1.0));
        let pool = generator(12).generate(&f).unwrap();
        // Transition repeats 49 and 64; its quota goes to 63, 56, 18.
        assert_eq!(pool, ids(&[49, 3, 64, 63, 56, 18, 24]));
    }

    #[test]
    fn zero_cap_is_an_error() {
        let f = SignalFeatures::empty(SignalOrigin::Text);
        assert!(generator(0).generate(&f).is_err());
    }
}
