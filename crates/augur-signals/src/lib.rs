//! # augur-signals
//!
//! Turns raw input into the path-independent [`SignalFeatures`] summary.
//!
//! - Structured path: [`weights`] table → [`aggregator`] → [`features::from_profile`].
//! - Free-text path: [`text::TextSignalExtractor`] → [`features::from_text`].
//!
//! [`SignalFeatures`]: augur_core::models::SignalFeatures

pub mod aggregator;
pub mod features;
pub mod text;
pub mod weights;

pub use aggregator::{aggregate, validate_answers};
pub use text::{Extraction, TextSignalExtractor};
