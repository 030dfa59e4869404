use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

macro_rules! category_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

category_enum!(
    /// Thematic keyword categories.
    Theme {
        Change => "change",
        Timing => "timing",
        Balance => "balance",
        Relationships => "relationships",
        Growth => "growth",
        Wisdom => "wisdom",
        Conflict => "conflict",
        Retreat => "retreat",
    }
);

category_enum!(
    /// Persona keyword categories.
    Persona {
        Multiplicity => "multiplicity",
        ContextSwitching => "context_switching",
        RoleFlexibility => "role_flexibility",
        Authenticity => "authenticity",
        Adaptation => "adaptation",
    }
);

category_enum!(
    /// Detected emotional states.
    EmotionalState {
        Anxiety => "anxiety",
        Hope => "hope",
        Sadness => "sadness",
        Frustration => "frustration",
        Confusion => "confusion",
        Calm => "calm",
        Joy => "joy",
    }
);

category_enum!(
    /// Detected situational states.
    SituationalState {
        Career => "career",
        Relationship => "relationship",
        Decision => "decision",
        Transition => "transition",
        Conflict => "conflict",
        Health => "health",
        Learning => "learning",
    }
);

impl Persona {
    /// How comfortably this persona holds several inner selves at once, in [0, 1].
    pub fn plurality_tolerance(self) -> f64 {
        match self {
            Persona::Multiplicity => 1.0,
            Persona::ContextSwitching => 0.8,
            Persona::RoleFlexibility => 0.7,
            Persona::Adaptation => 0.6,
            Persona::Authenticity => 0.3,
        }
    }
}

/// Per-category hit count and derived relevance in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub match_count: usize,
    pub relevance: f64,
}

/// A persona estimate with strength in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaEstimate {
    pub persona: Persona,
    pub strength: f64,
}

/// Where the token stream came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Analyzer,
    LocalTokenizer,
}

/// Output of the free-text signal extractor. Maps only hold categories
/// with at least one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSignal {
    pub themes: BTreeMap<Theme, CategoryMatch>,
    pub personas: BTreeMap<Persona, CategoryMatch>,
    pub emotions: BTreeMap<EmotionalState, CategoryMatch>,
    pub situations: BTreeMap<SituationalState, CategoryMatch>,
    /// Strongest first.
    pub dominant_personas: Vec<PersonaEstimate>,
    pub tokens: Vec<String>,
    pub token_source: TokenSource,
}

impl TextSignal {
    pub fn theme(&self, theme: Theme) -> CategoryMatch {
        self.themes.get(&theme).copied().unwrap_or_default()
    }

    pub fn persona(&self, persona: Persona) -> CategoryMatch {
        self.personas.get(&persona).copied().unwrap_or_default()
    }

    /// True when no category of any kind matched.
    pub fn is_silent(&self) -> bool {
        self.themes.is_empty()
            && self.personas.is_empty()
            && self.emotions.is_empty()
            && self.situations.is_empty()
    }
}
