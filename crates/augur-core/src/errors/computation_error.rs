/// Unexpected fault in a required pipeline stage. Converted to a FALLBACK reading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationError {
    #[error("feature extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("candidate generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("scoring failed for hexagram {id}: {reason}")]
    ScoringFailed { id: u8, reason: String },

    #[error("non-finite {factor} score for hexagram {id}")]
    NonFiniteScore { id: u8, factor: String },

    #[error("selection failed: {reason}")]
    SelectionFailed { reason: String },

    #[error("changing-line policy failed: {reason}")]
    ChangingLinesFailed { reason: String },

    #[error("assembly failed: {reason}")]
    AssemblyFailed { reason: String },

    #[error("stage {stage} panicked: {message}")]
    Panicked { stage: String, message: String },
}
