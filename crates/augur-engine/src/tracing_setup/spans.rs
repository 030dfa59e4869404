//! Span definitions: one per reading, one per pipeline stage.

/// Create a span covering one reading.
#[macro_export]
macro_rules! reading_span {
    ($path:expr) => {
        tracing::info_span!("augur.reading", path = %$path)
    };
}

/// Create a span covering one pipeline stage.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("augur.stage", stage = %$stage)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const READING: &str = "augur.reading";
    pub const STAGE: &str = "augur.stage";
}
