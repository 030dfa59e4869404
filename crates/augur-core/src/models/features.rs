use serde::{Deserialize, Serialize};

use super::text_signal::{EmotionalState, PersonaEstimate, SituationalState, Theme};
use super::trait_vector::GroupWeights;
use super::trigram::QuestionGroup;

/// Which input path produced a feature summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalOrigin {
    Answers,
    Text,
}

/// A signal item with a weight in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weighted<T> {
    pub item: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }
}

/// Path-independent summary consumed by candidate generation, scoring,
/// and the changing-line policy. Weighted lists are sorted strongest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalFeatures {
    pub origin: SignalOrigin,
    pub dominant_group: Option<QuestionGroup>,
    pub personas: Vec<PersonaEstimate>,
    pub themes: Vec<Weighted<Theme>>,
    pub emotions: Vec<Weighted<EmotionalState>>,
    pub situations: Vec<Weighted<SituationalState>>,
    /// Normalized group shares, when the input carried any group signal.
    pub group_shares: Option<GroupWeights>,
    /// Tolerance for inner plurality in [0, 1], when estimable.
    pub plurality_tolerance: Option<f64>,
}

impl SignalFeatures {
    /// A summary with no signal at all.
    pub fn empty(origin: SignalOrigin) -> Self {
        Self {
            origin,
            dominant_group: None,
            personas: Vec::new(),
            themes: Vec::new(),
            emotions: Vec::new(),
            situations: Vec::new(),
            group_shares: None,
            plurality_tolerance: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dominant_group.is_none()
            && self.personas.is_empty()
            && self.themes.is_empty()
            && self.emotions.is_empty()
            && self.situations.is_empty()
    }
}
