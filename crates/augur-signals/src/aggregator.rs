//! Sums per-answer allocations into a session profile.

use std::collections::HashSet;

use augur_core::errors::ValidationError;
use augur_core::models::{AggregateProfile, Answer, Choice, TraitVector};

use crate::weights;

/// Reject malformed answer sequences. Runs before any cache lookup.
pub fn validate_answers(answers: &[Answer]) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::EmptyAnswers);
    }
    let mut seen = HashSet::with_capacity(answers.len());
    for (position, answer) in answers.iter().enumerate() {
        let id = answer.question_id.trim();
        if id.is_empty() {
            return Err(ValidationError::MissingQuestionId { position });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateQuestion {
                question_id: id.to_string(),
            });
        }
        if let Some(choice) = answer.choice {
            if Choice::new(choice).is_none() {
                return Err(ValidationError::ChoiceOutOfRange {
                    question_id: id.to_string(),
                    choice,
                });
            }
        }
    }
    Ok(())
}

/// Validate, then sum the allocation of every answered question.
/// Unanswered questions contribute nothing.
pub fn aggregate(answers: &[Answer]) -> Result<AggregateProfile, ValidationError> {
    validate_answers(answers)?;

    let mut vector = TraitVector::ZERO;
    let mut answered = 0;
    for answer in answers {
        if let Some(choice) = answer.choice.and_then(Choice::new) {
            vector += weights::lookup(answer.group, choice);
            answered += 1;
        }
    }
    let profile = AggregateProfile::from_vector(vector, answered, answers.len() - answered);
    tracing::debug!(
        answered = profile.answered,
        unanswered = profile.unanswered,
        dominant_group = ?profile.dominant_group,
        "answers aggregated"
    );
    Ok(profile)
}
