//! Per-reading degradation policy.
//!
//! Required stages run through [`DegradationController::required`]: an
//! error or a panic stops the pipeline with a [`StageFailure`] and the
//! reading becomes FALLBACK. Optional stages report through
//! [`DegradationController::absorb`] or [`DegradationController::optional`]
//! and only lower the tier to PARTIAL.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use augur_core::errors::ComputationError;
use augur_core::models::{DegradationEvent, DegradationTier, PipelineStage};

/// A required stage did not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    pub stage: PipelineStage,
    pub error: ComputationError,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage failed: {}", self.stage, self.error)
    }
}

impl std::error::Error for StageFailure {}

/// Collects stage outcomes for one reading.
#[derive(Debug, Default)]
pub struct DegradationController {
    events: Vec<DegradationEvent>,
    completed: Vec<PipelineStage>,
}

impl DegradationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a required stage. Panics are caught and reported as failures.
    pub fn required<T>(
        &mut self,
        stage: PipelineStage,
        run: impl FnOnce() -> Result<T, ComputationError>,
    ) -> Result<T, StageFailure> {
        let span = crate::stage_span!(stage);
        let _guard = span.enter();
        match catch(stage, run) {
            Ok(value) => {
                tracing::debug!(stage = %stage, "stage completed");
                self.complete(stage);
                Ok(value)
            }
            Err(error) => Err(StageFailure { stage, error }),
        }
    }

    /// Run an optional stage. On failure the event is recorded and `None`
    /// tells the caller to use its local substitute.
    pub fn optional<T>(
        &mut self,
        stage: PipelineStage,
        fallback: &str,
        run: impl FnOnce() -> Result<T, ComputationError>,
    ) -> Option<T> {
        let span = crate::stage_span!(stage);
        let _guard = span.enter();
        match catch(stage, run) {
            Ok(value) => {
                self.complete(stage);
                Some(value)
            }
            Err(error) => {
                self.absorb(DegradationEvent::new(stage, error.to_string(), fallback));
                None
            }
        }
    }

    /// Note a stage that ran normally.
    pub fn complete(&mut self, stage: PipelineStage) {
        if !self.completed.contains(&stage) {
            self.completed.push(stage);
        }
    }

    /// Stages that ran normally, in completion order.
    pub fn completed(&self) -> &[PipelineStage] {
        &self.completed
    }

    /// Record an optional stage that already fell back on its own.
    pub fn absorb(&mut self, event: DegradationEvent) {
        tracing::debug!(
            stage = %event.stage,
            fallback = %event.fallback_used,
            "optional stage degraded"
        );
        self.events.push(event);
    }

    pub fn tier(&self) -> DegradationTier {
        if self.events.is_empty() {
            DegradationTier::Full
        } else {
            DegradationTier::Partial
        }
    }

    /// Degraded stages in first-seen order, without repeats.
    pub fn degraded_stages(&self) -> Vec<PipelineStage> {
        let mut stages: Vec<PipelineStage> = Vec::with_capacity(self.events.len());
        for event in &self.events {
            if !stages.contains(&event.stage) {
                stages.push(event.stage);
            }
        }
        stages
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DegradationEvent> {
        self.events
    }

    pub fn has_degraded(&self, stage: PipelineStage) -> bool {
        self.events.iter().any(|e| e.stage == stage)
    }
}

fn catch<T>(
    stage: PipelineStage,
    run: impl FnOnce() -> Result<T, ComputationError>,
) -> Result<T, ComputationError> {
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(ComputationError::Panicked {
            stage: stage.name().to_string(),
            message: panic_message(&*payload),
        }),
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
