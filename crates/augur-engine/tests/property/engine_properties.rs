//! Property-based tests for end-to-end reading invariants.

use proptest::prelude::*;

use augur_core::config::AugurConfig;
use augur_core::models::{Answer, DegradationTier, QuestionGroup, Reading};
use augur_engine::DivinationEngine;

fn answers_strategy() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec(
        (
            prop::sample::select(QuestionGroup::ALL.to_vec()),
            prop::option::of(1u8..=5),
        ),
        1..16,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (group, choice))| Answer {
                question_id: format!("q{i}"),
                group,
                choice,
            })
            .collect()
    })
}

fn assert_well_formed(reading: &Reading) -> Result<(), TestCaseError> {
    prop_assert!(!reading.error);
    prop_assert_eq!(reading.degradation_tier, DegradationTier::Full);
    prop_assert!((1..=64).contains(&reading.winner.id));
    prop_assert!(reading.alternates.len() <= 3);
    prop_assert!(reading
        .alternates
        .iter()
        .all(|alt| alt.score <= reading.winner.score));
    prop_assert!(reading.changing_lines.windows(2).all(|w| w[0] < w[1]));
    prop_assert!(reading.changing_lines.iter().all(|l| (1..=6).contains(l)));
    for value in [
        reading.metrics.confidence,
        reading.metrics.authenticity,
        reading.metrics.philosophical_alignment,
    ] {
        prop_assert!((0.0..=1.0).contains(&value));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any valid answer set yields a well-formed, repeatable reading.
    #[test]
    fn prop_answers_readings_well_formed(answers in answers_strategy()) {
        let engine = DivinationEngine::new(AugurConfig::default()).unwrap();
        let first = engine.divine_answers(&answers).unwrap();
        assert_well_formed(&first)?;
        let second = engine.divine_answers(&answers).unwrap();
        prop_assert!(first.same_selection(&second));
    }

    /// Any text long enough to pass validation yields a well-formed reading.
    #[test]
    fn prop_text_readings_well_formed(text in "[a-zA-Z ,.!?']{5,120}") {
        let engine = DivinationEngine::new(AugurConfig::default()).unwrap();
        match engine.divine_text(&text) {
            Ok(reading) => assert_well_formed(&reading)?,
            Err(err) => prop_assert!(text.trim().chars().count() < 5, "{}", err),
        }
    }
}
