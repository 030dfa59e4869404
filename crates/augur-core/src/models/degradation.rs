use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How much of the pipeline ran normally for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum DegradationTier {
    /// Every stage completed.
    Full,
    /// An optional stage fell back to a local substitute.
    Partial,
    /// A required stage failed; the fixed default reading was returned.
    Fallback,
}

/// Named pipeline stages, used for degradation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PipelineStage {
    Aggregation,
    TextExtraction,
    LinguisticAnalyzer,
    PersonaMapper,
    CandidateGeneration,
    Scoring,
    Selection,
    ChangingLines,
    Assembly,
    Cache,
}

impl PipelineStage {
    /// Optional stages degrade to PARTIAL; the rest force FALLBACK.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            PipelineStage::LinguisticAnalyzer
                | PipelineStage::PersonaMapper
                | PipelineStage::ChangingLines
                | PipelineStage::Cache
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::Aggregation => "aggregation",
            PipelineStage::TextExtraction => "text_extraction",
            PipelineStage::LinguisticAnalyzer => "linguistic_analyzer",
            PipelineStage::PersonaMapper => "persona_mapper",
            PipelineStage::CandidateGeneration => "candidate_generation",
            PipelineStage::Scoring => "scoring",
            PipelineStage::Selection => "selection",
            PipelineStage::ChangingLines => "changing_lines",
            PipelineStage::Assembly => "assembly",
            PipelineStage::Cache => "cache",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stage fell back to a lower-quality mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub stage: PipelineStage,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    pub fn new(
        stage: PipelineStage,
        failure: impl Into<String>,
        fallback_used: impl Into<String>,
    ) -> Self {
        Self {
            stage,
            failure: failure.into(),
            fallback_used: fallback_used.into(),
            timestamp: Utc::now(),
        }
    }
}
