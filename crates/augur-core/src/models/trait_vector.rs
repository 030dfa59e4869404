use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::trigram::{QuestionGroup, Trigram};
use crate::constants::{GROUP_TIE_EPSILON, TRAIT_DIMENSIONS};
use crate::errors::ValidationError;

/// Eight non-negative trait components, one per [`Trigram`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitVector {
    components: [f64; TRAIT_DIMENSIONS],
}

impl TraitVector {
    pub const ZERO: TraitVector = TraitVector {
        components: [0.0; TRAIT_DIMENSIONS],
    };

    /// Validated constructor. Rejects negative and non-finite components.
    pub fn try_new(components: [f64; TRAIT_DIMENSIONS]) -> Result<Self, ValidationError> {
        for (index, value) in components.iter().copied().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidTraitComponent { index, value });
            }
        }
        Ok(Self { components })
    }

    /// Infallible constructor for static tables. Negative or non-finite
    /// components are clamped to zero.
    pub fn clamped(components: [f64; TRAIT_DIMENSIONS]) -> Self {
        let mut c = components;
        for v in &mut c {
            if !v.is_finite() || *v < 0.0 {
                *v = 0.0;
            }
        }
        Self { components: c }
    }

    pub fn get(&self, trigram: Trigram) -> f64 {
        self.components[trigram.index()]
    }

    pub fn components(&self) -> &[f64; TRAIT_DIMENSIONS] {
        &self.components
    }

    pub fn sum(&self) -> f64 {
        self.components.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|v| *v == 0.0)
    }

    /// Sum of the components belonging to `group`.
    pub fn group_sum(&self, group: QuestionGroup) -> f64 {
        group.dimensions().iter().map(|t| self.get(*t)).sum()
    }

    pub fn group_weights(&self) -> GroupWeights {
        GroupWeights {
            a: self.group_sum(QuestionGroup::A),
            b: self.group_sum(QuestionGroup::B),
            c: self.group_sum(QuestionGroup::C),
        }
    }

    /// Largest component. Ties go to the earlier trigram; `None` for the zero vector.
    pub fn dominant_trigram(&self) -> Option<Trigram> {
        let mut best: Option<(Trigram, f64)> = None;
        for t in Trigram::ALL {
            let v = self.get(t);
            if v <= 0.0 {
                continue;
            }
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((t, v)),
            }
        }
        best.map(|(t, _)| t)
    }
}

impl Add for TraitVector {
    type Output = TraitVector;

    fn add(mut self, rhs: TraitVector) -> TraitVector {
        self += rhs;
        self
    }
}

impl AddAssign for TraitVector {
    fn add_assign(&mut self, rhs: TraitVector) {
        for (l, r) in self.components.iter_mut().zip(rhs.components.iter()) {
            *l += *r;
        }
    }
}

/// One scalar per question group. Used both for raw totals and for shares.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupWeights {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GroupWeights {
    pub fn get(&self, group: QuestionGroup) -> f64 {
        match group {
            QuestionGroup::A => self.a,
            QuestionGroup::B => self.b,
            QuestionGroup::C => self.c,
        }
    }

    pub fn total(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Largest group; ties resolve A > B > C. Sums within
    /// [`GROUP_TIE_EPSILON`] of each other are ties.
    pub fn dominant(&self) -> QuestionGroup {
        let mut best = QuestionGroup::A;
        for g in [QuestionGroup::B, QuestionGroup::C] {
            if self.get(g) > self.get(best) + GROUP_TIE_EPSILON {
                best = g;
            }
        }
        best
    }

    /// Shares summing to 1.0, or `None` when the total is zero.
    pub fn normalized(&self) -> Option<GroupWeights> {
        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return None;
        }
        Some(GroupWeights {
            a: self.a / total,
            b: self.b / total,
            c: self.c / total,
        })
    }

    /// Balance in [0, 1]: 1.0 when all three shares are equal, 0.0 when one
    /// group holds everything. Expects normalized shares.
    pub fn balance(&self) -> f64 {
        let max = self.a.max(self.b).max(self.c);
        (1.0 - (max - 1.0 / 3.0) / (2.0 / 3.0)).clamp(0.0, 1.0)
    }
}
