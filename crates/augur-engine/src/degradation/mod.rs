//! Degradation policy for a single reading and the cross-reading event log.

pub mod controller;
pub mod tracker;

pub use controller::{DegradationController, StageFailure};
pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
