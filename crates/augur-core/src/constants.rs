/// Augur engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of hexagrams in the reference corpus.
pub const HEXAGRAM_COUNT: u8 = 64;

/// Number of trait dimensions (one per trigram).
pub const TRAIT_DIMENSIONS: usize = 8;

/// Fixed sum of every allocation vector in the weight table.
pub const ALLOCATION_TOTAL: f64 = 6.0;

/// Lowest valid answer choice.
pub const MIN_CHOICE: u8 = 1;

/// Highest valid answer choice.
pub const MAX_CHOICE: u8 = 5;

/// The Receptive. Default winner when nothing can be selected.
pub const RECEPTIVE_HEXAGRAM: u8 = 2;

/// Number of line positions in a hexagram.
pub const HEXAGRAM_LINES: u8 = 6;

/// Upper bound of every factor score and of the aggregate score.
pub const SCORE_MAX: f64 = 100.0;

/// Persona estimates carried forward from a text signal.
pub const MAX_DOMINANT_PERSONAS: usize = 3;

/// Group sums closer than this count as tied.
pub const GROUP_TIE_EPSILON: f64 = 1e-9;
