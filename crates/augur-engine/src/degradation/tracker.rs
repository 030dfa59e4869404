//! Record every degradation event: stage, failure, fallback used, timestamp, recovery status.

use augur_core::models::{DegradationEvent, PipelineStage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// The stage has since completed normally.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Bounded log of degradation events across readings.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    max_events: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_EVENTS)
    }
}

impl DegradationTracker {
    pub const DEFAULT_MAX_EVENTS: usize = 1_000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max_events`, dropping the oldest first.
    pub fn with_capacity(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events: max_events.max(1),
        }
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            event.stage.name(),
            &event.failure,
            &event.fallback_used,
        );
        if self.events.len() >= self.max_events {
            self.events.remove(0);
        }
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Mark every active degradation of a stage as recovered.
    /// Returns how many were updated.
    pub fn mark_recovered(&mut self, stage: PipelineStage) -> usize {
        let now = Utc::now();
        let mut updated = 0;
        for tracked in self.events.iter_mut() {
            if tracked.event.stage == stage && tracked.recovery_status == RecoveryStatus::Active {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(now);
                updated += 1;
            }
        }
        if updated > 0 {
            tracing::info!(
                event = "degradation_recovered",
                component = %stage,
                count = updated,
                "stage recovered"
            );
        }
        updated
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, stage: PipelineStage) -> bool {
        self.events
            .iter()
            .any(|t| t.event.stage == stage && t.recovery_status == RecoveryStatus::Active)
    }

    /// Count events in the last N seconds for a given stage.
    pub fn count_recent(&self, stage: PipelineStage, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.stage == stage && t.event.timestamp > cutoff)
            .count()
    }

    /// Duration a stage has been continuously degraded, or None if not degraded.
    pub fn degraded_duration(&self, stage: PipelineStage) -> Option<chrono::Duration> {
        let earliest = self
            .events
            .iter()
            .filter(|t| t.event.stage == stage && t.recovery_status == RecoveryStatus::Active)
            .map(|t| t.event.timestamp)
            .min()?;
        Some(Utc::now() - earliest)
    }
}
