use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the 8 trigrams. Each trigram doubles as a trait dimension.
///
/// Declaration order is the dimension order used by [`TraitVector`](super::TraitVector):
/// the engine group first, then interface, then safe mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trigram {
    Heaven,
    Thunder,
    Water,
    Lake,
    Fire,
    Wind,
    Mountain,
    Earth,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Heaven,
        Trigram::Thunder,
        Trigram::Water,
        Trigram::Lake,
        Trigram::Fire,
        Trigram::Wind,
        Trigram::Mountain,
        Trigram::Earth,
    ];

    /// Dimension index into a trait vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The question group this dimension belongs to.
    pub fn group(self) -> QuestionGroup {
        match self {
            Trigram::Heaven | Trigram::Thunder | Trigram::Water => QuestionGroup::A,
            Trigram::Lake | Trigram::Fire | Trigram::Wind => QuestionGroup::B,
            Trigram::Mountain | Trigram::Earth => QuestionGroup::C,
        }
    }

    /// Line polarities, bottom to top. `true` is a solid (yang) line.
    pub fn lines(self) -> [bool; 3] {
        match self {
            Trigram::Heaven => [true, true, true],
            Trigram::Lake => [true, true, false],
            Trigram::Fire => [true, false, true],
            Trigram::Thunder => [true, false, false],
            Trigram::Wind => [false, true, true],
            Trigram::Water => [false, true, false],
            Trigram::Mountain => [false, false, true],
            Trigram::Earth => [false, false, false],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Heaven => "heaven",
            Trigram::Thunder => "thunder",
            Trigram::Water => "water",
            Trigram::Lake => "lake",
            Trigram::Fire => "fire",
            Trigram::Wind => "wind",
            Trigram::Mountain => "mountain",
            Trigram::Earth => "earth",
        }
    }

    /// Five-phase element (later-heaven arrangement).
    pub fn element(self) -> &'static str {
        match self {
            Trigram::Heaven | Trigram::Lake => "metal",
            Trigram::Fire => "fire",
            Trigram::Thunder | Trigram::Wind => "wood",
            Trigram::Water => "water",
            Trigram::Mountain | Trigram::Earth => "earth",
        }
    }

    pub fn season(self) -> &'static str {
        match self {
            Trigram::Heaven => "late autumn",
            Trigram::Lake => "autumn",
            Trigram::Fire => "summer",
            Trigram::Thunder => "spring",
            Trigram::Wind => "late spring",
            Trigram::Water => "winter",
            Trigram::Mountain => "late winter",
            Trigram::Earth => "late summer",
        }
    }

    pub fn direction(self) -> &'static str {
        match self {
            Trigram::Heaven => "northwest",
            Trigram::Lake => "west",
            Trigram::Fire => "south",
            Trigram::Thunder => "east",
            Trigram::Wind => "southeast",
            Trigram::Water => "north",
            Trigram::Mountain => "northeast",
            Trigram::Earth => "southwest",
        }
    }
}

/// A probed question dimension. Ties between groups resolve A > B > C.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum QuestionGroup {
    A,
    B,
    C,
}

impl QuestionGroup {
    /// Priority order, highest first.
    pub const ALL: [QuestionGroup; 3] = [QuestionGroup::A, QuestionGroup::B, QuestionGroup::C];

    /// Trait dimensions that make up this group.
    pub fn dimensions(self) -> &'static [Trigram] {
        match self {
            QuestionGroup::A => &[Trigram::Heaven, Trigram::Thunder, Trigram::Water],
            QuestionGroup::B => &[Trigram::Lake, Trigram::Fire, Trigram::Wind],
            QuestionGroup::C => &[Trigram::Mountain, Trigram::Earth],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionGroup::A => "engine",
            QuestionGroup::B => "interface",
            QuestionGroup::C => "safe_mode",
        }
    }

    pub fn code(self) -> char {
        match self {
            QuestionGroup::A => 'A',
            QuestionGroup::B => 'B',
            QuestionGroup::C => 'C',
        }
    }
}
