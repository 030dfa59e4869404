//! TypeScript bindings for the reading payload consumed by UI code.
//!
//! Run with: cargo test -p augur-core export_bindings
//! Generated files appear in augur-core/bindings/*.ts

#[test]
fn export_bindings() {
    use augur_core::models::{
        DegradationTier, GroupWeights, PipelineStage, QualityMetrics, Reading, ReadingMetadata,
        ReadingWarning, ResolvedCandidate, ScoreBreakdown, Trigram, ValidationRejection,
    };

    fn assert_ts<T: ts_rs::TS>() {}

    assert_ts::<Reading>();
    assert_ts::<ResolvedCandidate>();
    assert_ts::<ScoreBreakdown>();
    assert_ts::<QualityMetrics>();
    assert_ts::<ReadingMetadata>();
    assert_ts::<ReadingWarning>();
    assert_ts::<DegradationTier>();
    assert_ts::<PipelineStage>();
    assert_ts::<Trigram>();
    assert_ts::<GroupWeights>();
    assert_ts::<ValidationRejection>();
}
