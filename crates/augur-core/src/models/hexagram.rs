use std::fmt;

use serde::{Deserialize, Serialize};

use super::trigram::Trigram;
use crate::constants::{HEXAGRAM_COUNT, RECEPTIVE_HEXAGRAM};
use crate::errors::ValidationError;

/// A King Wen sequence number in `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct HexagramId(u8);

impl HexagramId {
    /// The Receptive (2).
    pub const RECEPTIVE: HexagramId = HexagramId(RECEPTIVE_HEXAGRAM);

    pub fn new(id: u32) -> Result<Self, ValidationError> {
        if (1..=HEXAGRAM_COUNT as u32).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(ValidationError::HexagramOutOfRange { id })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every id in sequence order.
    pub fn all() -> impl Iterator<Item = HexagramId> {
        (1..=HEXAGRAM_COUNT).map(HexagramId)
    }

    /// (upper, lower) trigrams.
    pub fn trigrams(self) -> (Trigram, Trigram) {
        KING_WEN[(self.0 - 1) as usize]
    }

    /// Line polarities, bottom (1) to top (6). `true` is yang.
    pub fn lines(self) -> [bool; 6] {
        let (upper, lower) = self.trigrams();
        let l = lower.lines();
        let u = upper.lines();
        [l[0], l[1], l[2], u[0], u[1], u[2]]
    }

    /// Internal plurality in [0, 1]: share of line positions where the
    /// upper and lower trigram disagree. Doubled trigrams score 0.
    pub fn plurality(self) -> f64 {
        let (upper, lower) = self.trigrams();
        let differing = upper
            .lines()
            .iter()
            .zip(lower.lines().iter())
            .filter(|(u, l)| u != l)
            .count();
        differing as f64 / 3.0
    }
}

impl TryFrom<u32> for HexagramId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        HexagramId::new(value)
    }
}

impl From<HexagramId> for u8 {
    fn from(id: HexagramId) -> u8 {
        id.0
    }
}

impl fmt::Display for HexagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use super::trigram::Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// (upper, lower) trigram composition in King Wen order.
const KING_WEN: [(Trigram, Trigram); 64] = [
    (Heaven, Heaven),     // 1
    (Earth, Earth),       // 2
    (Water, Thunder),     // 3
    (Mountain, Water),    // 4
    (Water, Heaven),      // 5
    (Heaven, Water),      // 6
    (Earth, Water),       // 7
    (Water, Earth),       // 8
    (Wind, Heaven),       // 9
    (Heaven, Lake),       // 10
    (Earth, Heaven),      // 11
    (Heaven, Earth),      // 12
    (Heaven, Fire),       // 13
    (Fire, Heaven),       // 14
    (Earth, Mountain),    // 15
    (Thunder, Earth),     // 16
    (Lake, Thunder),      // 17
    (Mountain, Wind),     // 18
    (Earth, Lake),        // 19
    (Wind, Earth),        // 20
    (Fire, Thunder),      // 21
    (Mountain, Fire),     // 22
    (Mountain, Earth),    // 23
    (Earth, Thunder),     // 24
    (Heaven, Thunder),    // 25
    (Mountain, Heaven),   // 26
    (Mountain, Thunder),  // 27
    (Lake, Wind),         // 28
    (Water, Water),       // 29
    (Fire, Fire),         // 30
    (Lake, Mountain),     // 31
    (Thunder, Wind),      // 32
    (Heaven, Mountain),   // 33
    (Thunder, Heaven),    // 34
    (Fire, Earth),        // 35
    (Earth, Fire),        // 36
    (Wind, Fire),         // 37
    (Fire, Lake),         // 38
    (Water, Mountain),    // 39
    (Thunder, Water),     // 40
    (Mountain, Lake),     // 41
    (Wind, Thunder),      // 42
    (Lake, Heaven),       // 43
    (Heaven, Wind),       // 44
    (Lake, Earth),        // 45
    (Earth, Wind),        // 46
    (Lake, Water),        // 47
    (Water, Wind),        // 48
    (Lake, Fire),         // 49
    (Fire, Wind),         // 50
    (Thunder, Thunder),   // 51
    (Mountain, Mountain), // 52
    (Wind, Mountain),     // 53
    (Thunder, Lake),      // 54
    (Thunder, Fire),      // 55
    (Fire, Mountain),     // 56
    (Wind, Wind),         // 57
    (Lake, Lake),         // 58
    (Wind, Water),        // 59
    (Water, Lake),        // 60
    (Wind, Lake),         // 61
    (Thunder, Mountain),  // 62
    (Water, Fire),        // 63
    (Fire, Water),        // 64
];

/// A reference record for one hexagram. Text fields may be missing in a
/// partially populated corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexagramRecord {
    pub id: HexagramId,
    pub name: String,
    pub upper: Trigram,
    pub lower: Trigram,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub classical_meaning: Option<String>,
    #[serde(default)]
    pub modern_interpretation: Option<String>,
    #[serde(default)]
    pub judgment: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl HexagramRecord {
    /// Stand-in for an id the corpus does not carry. Structure is known
    /// from the sequence; no texts are invented.
    pub fn placeholder(id: HexagramId) -> Self {
        let (upper, lower) = id.trigrams();
        Self {
            id,
            name: format!("Hexagram {id}"),
            upper,
            lower,
            element: None,
            season: None,
            direction: None,
            classical_meaning: None,
            modern_interpretation: None,
            judgment: None,
            image: None,
        }
    }

    /// Attestation completeness in [0, 1]. Classical meaning and judgment
    /// carry most of the weight.
    pub fn completeness(&self) -> f64 {
        fn present(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|s| !s.trim().is_empty())
        }
        let mut score: f64 = 0.0;
        if present(&self.classical_meaning) {
            score += 0.35;
        }
        if present(&self.judgment) {
            score += 0.35;
        }
        if present(&self.image) {
            score += 0.15;
        }
        if present(&self.modern_interpretation) {
            score += 0.15;
        }
        score.min(1.0)
    }
}
