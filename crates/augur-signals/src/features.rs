//! Conversion of either input path into [`SignalFeatures`].

use std::collections::BTreeMap;

use augur_core::models::{
    AggregateProfile, CategoryMatch, EmotionalState, GroupWeights, PersonaEstimate, QuestionGroup,
    SignalFeatures, SignalOrigin, SituationalState, TextSignal, Theme, Trigram, Weighted,
};

/// Dominant trait dimensions read as emotional states on the answers path.
const DERIVED_EMOTIONS: usize = 2;

/// Weight of the secondary situation derived from the dominant group.
const SECONDARY_SITUATION_WEIGHT: f64 = 0.6;

fn trigram_emotion(trigram: Trigram) -> EmotionalState {
    match trigram {
        Trigram::Heaven => EmotionalState::Hope,
        Trigram::Thunder => EmotionalState::Frustration,
        Trigram::Water => EmotionalState::Anxiety,
        Trigram::Lake | Trigram::Fire => EmotionalState::Joy,
        Trigram::Wind => EmotionalState::Confusion,
        Trigram::Mountain | Trigram::Earth => EmotionalState::Calm,
    }
}

fn group_situations(group: QuestionGroup) -> [SituationalState; 2] {
    match group {
        QuestionGroup::A => [SituationalState::Career, SituationalState::Decision],
        QuestionGroup::B => [SituationalState::Relationship, SituationalState::Conflict],
        QuestionGroup::C => [SituationalState::Health, SituationalState::Transition],
    }
}

/// Question group a theme speaks to, used for text-path group shares.
pub fn theme_group(theme: Theme) -> QuestionGroup {
    match theme {
        Theme::Change | Theme::Growth | Theme::Wisdom => QuestionGroup::A,
        Theme::Relationships | Theme::Conflict | Theme::Balance => QuestionGroup::B,
        Theme::Timing | Theme::Retreat => QuestionGroup::C,
    }
}

/// Structured path. An empty profile yields empty features.
pub fn from_profile(profile: &AggregateProfile) -> SignalFeatures {
    if profile.is_empty() {
        return SignalFeatures::empty(SignalOrigin::Answers);
    }

    let shares = profile.group_totals.normalized();
    SignalFeatures {
        origin: SignalOrigin::Answers,
        dominant_group: Some(profile.dominant_group),
        personas: Vec::new(),
        themes: Vec::new(),
        emotions: derived_emotions(profile),
        situations: derived_situations(profile.dominant_group),
        plurality_tolerance: shares.map(|s| s.balance()),
        group_shares: shares,
    }
}

/// Free-text path.
pub fn from_text(signal: &TextSignal) -> SignalFeatures {
    SignalFeatures {
        origin: SignalOrigin::Text,
        dominant_group: None,
        personas: signal.dominant_personas.clone(),
        themes: ranked(&signal.themes),
        emotions: ranked(&signal.emotions),
        situations: ranked(&signal.situations),
        group_shares: text_group_shares(signal),
        plurality_tolerance: persona_tolerance(&signal.dominant_personas),
    }
}

fn derived_emotions(profile: &AggregateProfile) -> Vec<Weighted<EmotionalState>> {
    let mut dims: Vec<(Trigram, f64)> = Trigram::ALL
        .iter()
        .map(|t| (*t, profile.vector.get(*t)))
        .filter(|(_, v)| *v > 0.0)
        .collect();
    dims.sort_by(|a, b| b.1.total_cmp(&a.1));

    let Some(max) = dims.first().map(|(_, v)| *v) else {
        return Vec::new();
    };
    let mut out: Vec<Weighted<EmotionalState>> = Vec::with_capacity(DERIVED_EMOTIONS);
    for (trigram, value) in dims.into_iter().take(DERIVED_EMOTIONS) {
        let emotion = trigram_emotion(trigram);
        if out.iter().any(|w| w.item == emotion) {
            continue;
        }
        out.push(Weighted::new(emotion, value / max));
    }
    out
}

fn derived_situations(group: QuestionGroup) -> Vec<Weighted<SituationalState>> {
    let [primary, secondary] = group_situations(group);
    vec![
        Weighted::new(primary, 1.0),
        Weighted::new(secondary, SECONDARY_SITUATION_WEIGHT),
    ]
}

/// Matched categories, strongest first. Ties keep declaration order.
fn ranked<K: Copy + Ord>(matches: &BTreeMap<K, CategoryMatch>) -> Vec<Weighted<K>> {
    let mut out: Vec<Weighted<K>> = matches
        .iter()
        .filter(|(_, m)| m.relevance > 0.0)
        .map(|(k, m)| Weighted::new(*k, m.relevance))
        .collect();
    out.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    out
}

fn text_group_shares(signal: &TextSignal) -> Option<GroupWeights> {
    let mut totals = GroupWeights::default();
    for (theme, m) in &signal.themes {
        match theme_group(*theme) {
            QuestionGroup::A => totals.a += m.relevance,
            QuestionGroup::B => totals.b += m.relevance,
            QuestionGroup::C => totals.c += m.relevance,
        }
    }
    totals.normalized()
}

/// Strength-weighted mean of persona plurality tolerances.
fn persona_tolerance(personas: &[PersonaEstimate]) -> Option<f64> {
    let total: f64 = personas.iter().map(|p| p.strength).sum();
    if !(total > 0.0) {
        return None;
    }
    let weighted: f64 = personas
        .iter()
        .map(|p| p.strength * p.persona.plurality_tolerance())
        .sum();
    Some((weighted / total).clamp(0.0, 1.0))
}
