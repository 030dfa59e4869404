//! # augur-selection
//!
//! From a feature summary to a ranked selection:
//! [`CandidateGenerator`] → [`MultiFactorScorer`] → [`Selector`], with
//! [`ThreePowersPolicy`] as the default changing-line policy.

pub mod changing_lines;
pub mod generator;
pub mod scorer;
pub mod selector;

pub use changing_lines::ThreePowersPolicy;
pub use generator::CandidateGenerator;
pub use scorer::MultiFactorScorer;
pub use selector::{Ranking, Selector, EMPTY_POOL_REASON};
