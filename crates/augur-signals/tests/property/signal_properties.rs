//! Property-based tests for the weight table, aggregation, and extraction.

use proptest::prelude::*;

use augur_core::config::TextConfig;
use augur_core::constants::{ALLOCATION_TOTAL, GROUP_TIE_EPSILON};
use augur_core::models::{Answer, QuestionGroup};
use augur_signals::{aggregate, features, TextSignalExtractor};

fn group_strategy() -> impl Strategy<Value = QuestionGroup> {
    prop_oneof![
        Just(QuestionGroup::A),
        Just(QuestionGroup::B),
        Just(QuestionGroup::C),
    ]
}

fn answer_strategy() -> impl Strategy<Value = Vec<(QuestionGroup, Option<u8>)>> {
    prop::collection::vec((group_strategy(), prop::option::of(1u8..=5)), 1..40)
}

proptest! {
    /// Aggregate total is always 6.0 per answered question.
    #[test]
    fn prop_aggregate_total_tracks_answered(picks in answer_strategy()) {
        let answers: Vec<Answer> = picks
            .iter()
            .enumerate()
            .map(|(i, (group, choice))| Answer {
                question_id: format!("q{i}"),
                group: *group,
                choice: *choice,
            })
            .collect();
        let profile = aggregate(&answers).unwrap();
        let expected = ALLOCATION_TOTAL * profile.answered as f64;
        prop_assert!((profile.vector.sum() - expected).abs() < 1e-6);
        prop_assert_eq!(profile.answered + profile.unanswered, answers.len());
        prop_assert!(profile.vector.components().iter().all(|c| *c >= 0.0));
    }

    /// Dominant group holds the largest total; near-equal totals go to
    /// the earliest group.
    #[test]
    fn prop_dominant_group_is_maximal(picks in answer_strategy()) {
        let answers: Vec<Answer> = picks
            .iter()
            .enumerate()
            .map(|(i, (group, choice))| Answer {
                question_id: format!("q{i}"),
                group: *group,
                choice: *choice,
            })
            .collect();
        let profile = aggregate(&answers).unwrap();
        let totals = profile.group_totals;
        let dominant = totals.get(profile.dominant_group);
        for g in QuestionGroup::ALL {
            if g < profile.dominant_group {
                prop_assert!(dominant > totals.get(g) + GROUP_TIE_EPSILON);
            } else {
                prop_assert!(dominant + GROUP_TIE_EPSILON >= totals.get(g));
            }
        }
    }

    /// Any choice outside 1..=5 is rejected, wherever it appears.
    #[test]
    fn prop_out_of_range_choice_rejected(bad in 6u8..=255, position in 0usize..5) {
        let mut answers: Vec<Answer> = (0..5)
            .map(|i| Answer::new(format!("q{i}"), QuestionGroup::A, 3))
            .collect();
        answers[position].choice = Some(bad);
        prop_assert!(aggregate(&answers).is_err());
    }

    /// Extraction never fails on long-enough text and relevance stays in (0, 1].
    #[test]
    fn prop_extraction_relevance_bounded(text in "\\PC{5,200}") {
        prop_assume!(text.trim().chars().count() >= 5);
        let extractor = TextSignalExtractor::new(TextConfig::default());
        let out = extractor.extract(&text).unwrap();
        for m in out.signal.themes.values().chain(out.signal.personas.values()) {
            prop_assert!(m.match_count > 0);
            prop_assert!(m.relevance > 0.0 && m.relevance <= 1.0);
        }
        let f = features::from_text(&out.signal);
        if let Some(shares) = f.group_shares {
            prop_assert!((shares.total() - 1.0).abs() < 1e-9);
        }
        if let Some(t) = f.plurality_tolerance {
            prop_assert!((0.0..=1.0).contains(&t));
        }
    }
}
