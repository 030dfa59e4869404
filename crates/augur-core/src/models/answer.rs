use serde::{Deserialize, Serialize};

use super::trigram::QuestionGroup;
use super::trait_vector::{GroupWeights, TraitVector};
use crate::constants::{MAX_CHOICE, MIN_CHOICE};
use crate::errors::ValidationError;

/// One structured answer. `choice: None` marks an unanswered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub group: QuestionGroup,
    pub choice: Option<u8>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, group: QuestionGroup, choice: u8) -> Self {
        Self {
            question_id: question_id.into(),
            group,
            choice: Some(choice),
        }
    }

    pub fn unanswered(question_id: impl Into<String>, group: QuestionGroup) -> Self {
        Self {
            question_id: question_id.into(),
            group,
            choice: None,
        }
    }
}

/// A validated answer choice in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Choice(u8);

impl Choice {
    pub const ALL: [Choice; 5] = [Choice(1), Choice(2), Choice(3), Choice(4), Choice(5)];

    pub fn new(value: u8) -> Option<Self> {
        (MIN_CHOICE..=MAX_CHOICE).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Choice {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Choice::new(value).ok_or(ValidationError::ChoiceOutOfRange {
            question_id: String::new(),
            choice: value,
        })
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> u8 {
        choice.0
    }
}

/// Session-level sum of all answered allocation vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateProfile {
    pub vector: TraitVector,
    pub group_totals: GroupWeights,
    pub dominant_group: QuestionGroup,
    pub answered: usize,
    pub unanswered: usize,
}

impl AggregateProfile {
    pub fn from_vector(vector: TraitVector, answered: usize, unanswered: usize) -> Self {
        let group_totals = vector.group_weights();
        Self {
            vector,
            dominant_group: group_totals.dominant(),
            group_totals,
            answered,
            unanswered,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answered == 0 || self.vector.is_zero()
    }
}
