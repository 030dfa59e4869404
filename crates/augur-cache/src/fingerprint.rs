//! Content fingerprints for cache keys.
//!
//! Both input paths hash a path-prefixed canonical string with blake3, so a
//! text and an answer set can never share a key.

use std::fmt;

use augur_core::models::Answer;
use serde::{Deserialize, Serialize};

/// Hex-encoded blake3 digest of a canonical input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn of(canonical: &str) -> Self {
        Self(blake3::hash(canonical.as_bytes()).to_hex().to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, collapse whitespace runs to one space, keep the first
/// `prefix_chars` characters.
pub fn normalize_text(text: &str, prefix_chars: usize) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    collapsed.chars().take(prefix_chars).collect()
}

pub fn text_fingerprint(text: &str, prefix_chars: usize) -> Fingerprint {
    Fingerprint::of(&format!("text:{}", normalize_text(text, prefix_chars)))
}

/// Stable serialization ordered by question id. Each answer is
/// `<id byte length>:<id><group><choice>`, so ids may contain any
/// character without two answer sets colliding. Unanswered questions
/// serialize their choice as `-`.
pub fn canonical_answers(answers: &[Answer]) -> String {
    let mut keyed: Vec<(&str, char, Option<u8>)> = answers
        .iter()
        .map(|a| (a.question_id.trim(), a.group.code(), a.choice))
        .collect();
    keyed.sort_unstable();
    keyed
        .into_iter()
        .map(|(id, group, choice)| {
            let choice = choice.map_or_else(|| "-".to_string(), |c| c.to_string());
            format!("{}:{id}{group}{choice}", id.len())
        })
        .collect::<Vec<_>>()
        .join(";")
}

pub fn answers_fingerprint(answers: &[Answer]) -> Fingerprint {
    Fingerprint::of(&format!("answers:{}", canonical_answers(answers)))
}
