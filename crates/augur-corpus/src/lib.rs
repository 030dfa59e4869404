//! # augur-corpus
//!
//! Read-only reference data:
//! - [`StaticCorpus`]: all 64 hexagram records, built in.
//! - [`InMemoryCorpus`]: a possibly partial corpus supplied as JSON.
//! - [`associations`]: static signal → hexagram tables shared by candidate
//!   generation and scoring.

pub mod associations;
mod in_memory;
mod static_corpus;

pub use associations::AssociationKey;
pub use in_memory::InMemoryCorpus;
pub use static_corpus::StaticCorpus;
