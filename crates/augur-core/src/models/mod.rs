pub mod answer;
pub mod candidate;
pub mod degradation;
pub mod features;
pub mod hexagram;
pub mod reading;
pub mod selection;
pub mod text_signal;
pub mod trait_vector;
pub mod trigram;

pub use answer::{AggregateProfile, Answer, Choice};
pub use candidate::{ScoreBreakdown, ScoredCandidate};
pub use degradation::{DegradationEvent, DegradationTier, PipelineStage};
pub use features::{SignalFeatures, SignalOrigin, Weighted};
pub use hexagram::{HexagramId, HexagramRecord};
pub use reading::{
    QualityMetrics, Reading, ReadingMetadata, ReadingWarning, ResolvedCandidate,
    ValidationRejection,
};
pub use selection::SelectionResult;
pub use text_signal::{
    CategoryMatch, EmotionalState, Persona, PersonaEstimate, SituationalState, TextSignal, Theme,
    TokenSource,
};
pub use trait_vector::{GroupWeights, TraitVector};
pub use trigram::{QuestionGroup, Trigram};
