//! # augur-engine
//!
//! Orchestrates the selection pipeline end to end.
//!
//! [`DivinationEngine`] owns the per-request pipeline and an optional shared
//! [`ResultCache`](augur_cache::ResultCache). Stage outcomes flow through the
//! [`DegradationController`](degradation::DegradationController), which
//! decides the FULL / PARTIAL / FALLBACK tier; the
//! [`DegradationTracker`](degradation::DegradationTracker) keeps the
//! cross-reading event log.

pub mod assembler;
pub mod degradation;
pub mod engine;
pub mod tracing_setup;

pub use assembler::Assembler;
pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use engine::{DivinationEngine, EngineBuilder};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
