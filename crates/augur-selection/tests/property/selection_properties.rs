//! Property-based tests for pool bounds, score ranges, ranking order, and
//! changing-line output.

use proptest::prelude::*;

use augur_core::config::AugurConfig;
use augur_core::models::{
    EmotionalState, GroupWeights, HexagramId, Persona, PersonaEstimate, QuestionGroup,
    SignalFeatures, SignalOrigin, SituationalState, Theme, Weighted,
};
use augur_core::traits::{ICandidateGenerator, ICandidateScorer, IChangingLinePolicy};
use augur_corpus::StaticCorpus;
use augur_selection::{CandidateGenerator, MultiFactorScorer, Selector, ThreePowersPolicy};

fn weighted<T: Copy + std::fmt::Debug + 'static>(
    all: &'static [T],
) -> impl Strategy<Value = Vec<Weighted<T>>> {
    prop::collection::vec((prop::sample::select(all), 0.01f64..=1.0), 0..4)
        .prop_map(|v| v.into_iter().map(|(item, w)| Weighted::new(item, w)).collect())
}

fn features_strategy() -> impl Strategy<Value = SignalFeatures> {
    (
        prop::option::of(prop::sample::select(QuestionGroup::ALL.to_vec())),
        prop::collection::vec((prop::sample::select(Persona::ALL), 0.01f64..=1.0), 0..3),
        weighted(Theme::ALL),
        weighted(EmotionalState::ALL),
        weighted(SituationalState::ALL),
        prop::option::of((0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)),
        prop::option::of(0.0f64..=1.0),
    )
        .prop_map(|(group, personas, themes, emotions, situations, shares, tolerance)| {
            SignalFeatures {
                origin: SignalOrigin::Text,
                dominant_group: group,
                personas: personas
                    .into_iter()
                    .map(|(persona, strength)| PersonaEstimate { persona, strength })
                    .collect(),
                themes,
                emotions,
                situations,
                group_shares: shares.and_then(|(a, b, c)| GroupWeights { a, b, c }.normalized()),
                plurality_tolerance: tolerance,
            }
        })
}

proptest! {
    /// Pool is unique and never exceeds the cap.
    #[test]
    fn prop_pool_bounded_and_unique(f in features_strategy(), cap in 1usize..20) {
        let mut config = AugurConfig::default();
        config.candidates.max_candidates = cap;
        let pool = CandidateGenerator::new(&config.candidates).generate(&f).unwrap();
        prop_assert!(pool.len() <= cap);
        let mut sorted = pool.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), pool.len());
    }

    /// Every factor and the aggregate stay in [0, 100].
    #[test]
    fn prop_scores_bounded(f in features_strategy(), raw in 1u32..=64) {
        let config = AugurConfig::default();
        let id = HexagramId::new(raw).unwrap();
        let c = MultiFactorScorer::new(&config.scoring)
            .score(id, &f, &StaticCorpus::new())
            .unwrap();
        for (_, v) in c.breakdown.factors() {
            prop_assert!((0.0..=100.0 + 1e-9).contains(&v));
        }
        prop_assert!((0.0..=100.0).contains(&c.score));
    }

    /// Scoring is deterministic and the winner dominates the pool.
    #[test]
    fn prop_ranking_is_deterministic(f in features_strategy()) {
        let config = AugurConfig::default();
        let corpus = StaticCorpus::new();
        let pool = CandidateGenerator::new(&config.candidates).generate(&f).unwrap();
        let scorer = MultiFactorScorer::new(&config.scoring);
        let first = scorer.score_all(&pool, &f, &corpus).unwrap();
        let second = scorer.score_all(&pool, &f, &corpus).unwrap();
        prop_assert_eq!(&first, &second);

        let selector = Selector::new(&config.selection);
        let ranking = selector.rank(first.clone()).unwrap();
        prop_assert_eq!(&ranking, &selector.rank(second).unwrap());
        for c in &first {
            prop_assert!(ranking.winner.score >= c.score);
        }
    }

    /// Changing lines are ascending, unique, and within 1..=6.
    #[test]
    fn prop_changing_lines_well_formed(f in features_strategy(), raw in 1u32..=64) {
        let lines = ThreePowersPolicy::default()
            .changing_lines(HexagramId::new(raw).unwrap(), &f)
            .unwrap();
        prop_assert!(lines.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(lines.iter().all(|l| (1..=6).contains(l)));
        if f.group_shares.is_none() {
            prop_assert!(lines.is_empty());
        }
    }
}
