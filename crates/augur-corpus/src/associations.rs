//! Static signal → hexagram association tables.
//!
//! Each list is ordered by strength of association: position 0 is the
//! canonical hexagram for that signal. Candidate generation walks these
//! lists in order; scoring uses the position as a rank.

use augur_core::models::{EmotionalState, HexagramId, Persona, QuestionGroup, SituationalState, Theme};

/// Any signal that carries an association list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKey {
    Group(QuestionGroup),
    Persona(Persona),
    Theme(Theme),
    Emotion(EmotionalState),
    Situation(SituationalState),
}

impl From<QuestionGroup> for AssociationKey {
    fn from(group: QuestionGroup) -> Self {
        AssociationKey::Group(group)
    }
}

impl From<Persona> for AssociationKey {
    fn from(persona: Persona) -> Self {
        AssociationKey::Persona(persona)
    }
}

impl From<Theme> for AssociationKey {
    fn from(theme: Theme) -> Self {
        AssociationKey::Theme(theme)
    }
}

impl From<EmotionalState> for AssociationKey {
    fn from(emotion: EmotionalState) -> Self {
        AssociationKey::Emotion(emotion)
    }
}

impl From<SituationalState> for AssociationKey {
    fn from(situation: SituationalState) -> Self {
        AssociationKey::Situation(situation)
    }
}

/// Raw association list for `key`, strongest first.
pub fn associated(key: AssociationKey) -> &'static [u8] {
    match key {
        AssociationKey::Group(g) => group(g),
        AssociationKey::Persona(p) => persona(p),
        AssociationKey::Theme(t) => theme(t),
        AssociationKey::Emotion(e) => emotion(e),
        AssociationKey::Situation(s) => situation(s),
    }
}

/// Rank of `id` in the association list for `key`.
pub fn position(key: AssociationKey, id: HexagramId) -> Option<usize> {
    associated(key).iter().position(|&h| h == id.get())
}

/// Association list as validated ids. Out-of-range table entries are skipped.
pub fn hexagrams(key: AssociationKey) -> impl Iterator<Item = HexagramId> {
    associated(key)
        .iter()
        .filter_map(|&h| HexagramId::new(u32::from(h)).ok())
}

fn group(group: QuestionGroup) -> &'static [u8] {
    match group {
        QuestionGroup::A => &[1, 34, 25, 51, 43, 14],
        QuestionGroup::B => &[58, 31, 37, 13, 45, 61],
        QuestionGroup::C => &[52, 2, 15, 33, 39, 29],
    }
}

fn persona(persona: Persona) -> &'static [u8] {
    match persona {
        Persona::Multiplicity => &[64, 38, 49, 59],
        Persona::ContextSwitching => &[57, 17, 56, 40],
        Persona::RoleFlexibility => &[37, 13, 8, 54],
        Persona::Authenticity => &[61, 25, 1, 30],
        Persona::Adaptation => &[18, 42, 46, 53],
    }
}

fn theme(theme: Theme) -> &'static [u8] {
    match theme {
        Theme::Change => &[49, 3, 64, 63, 24, 18],
        Theme::Timing => &[5, 16, 60, 53, 24],
        Theme::Balance => &[11, 63, 15, 60, 50],
        Theme::Relationships => &[31, 37, 54, 8, 13, 45],
        Theme::Growth => &[46, 42, 53, 35, 3],
        Theme::Wisdom => &[4, 20, 27, 48, 50, 61],
        Theme::Conflict => &[6, 38, 21, 7, 49],
        Theme::Retreat => &[33, 52, 36, 12, 23],
    }
}

fn emotion(emotion: EmotionalState) -> &'static [u8] {
    match emotion {
        EmotionalState::Anxiety => &[29, 47, 39, 5, 3],
        EmotionalState::Hope => &[11, 24, 35, 42, 46],
        EmotionalState::Sadness => &[36, 23, 12, 47, 41],
        EmotionalState::Frustration => &[47, 39, 6, 21, 43],
        EmotionalState::Confusion => &[4, 59, 64, 3, 20],
        EmotionalState::Calm => &[52, 15, 2, 61, 20],
        EmotionalState::Joy => &[58, 16, 55, 11, 14],
    }
}

fn situation(situation: SituationalState) -> &'static [u8] {
    match situation {
        SituationalState::Career => &[1, 14, 35, 46, 50, 34],
        SituationalState::Relationship => &[31, 32, 37, 54, 8],
        SituationalState::Decision => &[43, 49, 10, 60, 6],
        SituationalState::Transition => &[49, 64, 63, 56, 18],
        SituationalState::Conflict => &[6, 38, 7, 21, 13],
        SituationalState::Health => &[27, 48, 52, 24, 50],
        SituationalState::Learning => &[4, 20, 48, 58, 26],
    }
}
