use augur_core::models::*;

#[test]
fn answer_deserializes_from_wire_shape() {
    let json = r#"[
        {"question_id": "q1", "group": "A", "choice": 1},
        {"question_id": "q2", "group": "C", "choice": null}
    ]"#;
    let answers: Vec<Answer> = serde_json::from_str(json).unwrap();
    assert_eq!(answers[0], Answer::new("q1", QuestionGroup::A, 1));
    assert_eq!(answers[1], Answer::unanswered("q2", QuestionGroup::C));
}

#[test]
fn hexagram_id_rejects_out_of_range_on_deserialize() {
    assert!(serde_json::from_str::<HexagramId>("0").is_err());
    assert!(serde_json::from_str::<HexagramId>("65").is_err());
    assert_eq!(serde_json::from_str::<HexagramId>("64").unwrap().get(), 64);
}

#[test]
fn choice_rejects_out_of_range() {
    assert!(Choice::new(0).is_none());
    assert!(Choice::new(6).is_none());
    assert_eq!(Choice::new(3).map(Choice::get), Some(3));
}

#[test]
fn tier_serializes_upper_case() {
    assert_eq!(
        serde_json::to_string(&DegradationTier::Partial).unwrap(),
        "\"PARTIAL\""
    );
}

#[test]
fn optional_stages() {
    assert!(PipelineStage::LinguisticAnalyzer.is_optional());
    assert!(PipelineStage::ChangingLines.is_optional());
    assert!(!PipelineStage::Scoring.is_optional());
    assert!(!PipelineStage::CandidateGeneration.is_optional());
}

#[test]
fn text_signal_lookup_defaults_to_zero() {
    let signal = TextSignal {
        themes: Default::default(),
        personas: Default::default(),
        emotions: Default::default(),
        situations: Default::default(),
        dominant_personas: Vec::new(),
        tokens: Vec::new(),
        token_source: TokenSource::LocalTokenizer,
    };
    assert_eq!(signal.theme(Theme::Change).match_count, 0);
    assert!(signal.is_silent());
}

#[test]
fn category_names_are_snake_case() {
    assert_eq!(Persona::ContextSwitching.name(), "context_switching");
    assert_eq!(
        serde_json::to_string(&Persona::RoleFlexibility).unwrap(),
        "\"role_flexibility\""
    );
}
