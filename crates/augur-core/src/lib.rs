//! # augur-core
//!
//! Foundation crate for the Augur selection engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AugurConfig;
pub use errors::{AugurError, AugurResult, ValidationError};
pub use models::{
    Answer, DegradationTier, HexagramId, QuestionGroup, Reading, SignalFeatures, TraitVector,
    Trigram,
};
