//! Corpus loading and association coverage.

use augur_core::errors::AugurError;
use augur_core::models::{HexagramId, Theme, Trigram};
use augur_core::traits::IHexagramCorpus;
use augur_corpus::{associations, InMemoryCorpus, StaticCorpus};

const PARTIAL_JSON: &str = r#"[
    {
        "id": 1,
        "name": "The Creative",
        "upper": "heaven",
        "lower": "heaven",
        "classical_meaning": "creative power",
        "judgment": "Sublime success."
    },
    {
        "id": 29,
        "name": "The Abysmal",
        "upper": "water",
        "lower": "water"
    }
]"#;

#[test]
fn partial_json_corpus_loads() {
    let corpus = InMemoryCorpus::from_json(PARTIAL_JSON).unwrap();
    assert_eq!(corpus.len(), 2);

    let creative = corpus.get(HexagramId::new(1).unwrap()).unwrap();
    assert!((creative.completeness() - 0.70).abs() < 1e-9);

    let abysmal = corpus.get(HexagramId::new(29).unwrap()).unwrap();
    assert_eq!(abysmal.completeness(), 0.0);
    assert_eq!(abysmal.upper, Trigram::Water);

    assert!(corpus.get(HexagramId::new(2).unwrap()).is_none());
}

#[test]
fn json_with_wrong_trigrams_is_rejected() {
    let json = r#"[{"id": 2, "name": "x", "upper": "heaven", "lower": "earth"}]"#;
    let err = InMemoryCorpus::from_json(json).unwrap_err();
    assert!(matches!(err, AugurError::ConfigError(_)));
}

#[test]
fn json_with_duplicate_ids_is_rejected() {
    let json = r#"[
        {"id": 2, "name": "a", "upper": "earth", "lower": "earth"},
        {"id": 2, "name": "b", "upper": "earth", "lower": "earth"}
    ]"#;
    assert!(matches!(
        InMemoryCorpus::from_json(json),
        Err(AugurError::ConfigError(_))
    ));
}

#[test]
fn json_with_out_of_range_id_is_rejected() {
    let json = r#"[{"id": 65, "name": "x", "upper": "earth", "lower": "earth"}]"#;
    assert!(matches!(
        InMemoryCorpus::from_json(json),
        Err(AugurError::SerializationError(_))
    ));
}

#[test]
fn static_corpus_resolves_every_associated_id() {
    let corpus = StaticCorpus::new();
    for theme in Theme::ALL {
        for id in associations::hexagrams((*theme).into()) {
            let (_, placeholder) = corpus.resolve(id);
            assert!(!placeholder, "{id} missing from static corpus");
        }
    }
}

#[test]
fn static_corpus_round_trips_through_json() {
    let corpus = StaticCorpus::new();
    let records: Vec<_> = HexagramId::all().filter_map(|id| corpus.get(id)).collect();
    let json = serde_json::to_string(&records).unwrap();
    let reloaded = InMemoryCorpus::from_json(&json).unwrap();
    assert_eq!(reloaded.len(), 64);
    let id = HexagramId::new(64).unwrap();
    assert_eq!(reloaded.get(id), corpus.get(id));
}
