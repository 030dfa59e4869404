//! Bounded calls into the optional linguistic analyzer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use augur_core::errors::DependencyError;
use augur_core::traits::ILinguisticAnalyzer;
use crossbeam_channel::RecvTimeoutError;

/// Caps the analyzer workers alive at once.
///
/// A worker holds its permit until the analyzer returns, not until the
/// caller stops waiting, so a hung analyzer pins at most `limit` threads.
/// Clones share the count.
#[derive(Debug, Clone)]
pub struct WorkerGate {
    in_flight: Arc<AtomicUsize>,
    limit: usize,
}

impl WorkerGate {
    pub fn new(limit: usize) -> Self {
        Self {
            in_flight: Arc::new(AtomicUsize::new(0)),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Workers that have not returned yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_acquire(&self) -> Option<WorkerPermit> {
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.limit).then_some(n + 1)
            })
            .ok()
            .map(|_| WorkerPermit(Arc::clone(&self.in_flight)))
    }
}

struct WorkerPermit(Arc<AtomicUsize>);

impl Drop for WorkerPermit {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Run `analyzer.tokenize` on a worker thread and wait at most `timeout`.
///
/// A timed-out worker is detached; its late result is dropped with the
/// channel. While `gate` is full no worker is started and the call fails
/// with `Saturated`. A worker that panics surfaces as `Failed`.
pub fn tokenize_with_timeout(
    analyzer: &Arc<dyn ILinguisticAnalyzer>,
    gate: &WorkerGate,
    text: &str,
    timeout: Duration,
) -> Result<Vec<String>, DependencyError> {
    let name = analyzer.name().to_string();
    if !analyzer.is_available() {
        return Err(DependencyError::Unavailable { name });
    }
    let Some(permit) = gate.try_acquire() else {
        return Err(DependencyError::Saturated {
            name,
            limit: gate.limit(),
        });
    };

    let (tx, rx) = crossbeam_channel::bounded(1);
    let worker = Arc::clone(analyzer);
    let owned = text.to_string();
    thread::Builder::new()
        .name("augur-analyzer".into())
        .spawn(move || {
            let _permit = permit;
            // The receiver may already be gone after a timeout.
            let _ = tx.send(worker.tokenize(&owned));
        })
        .map_err(|e| DependencyError::Failed {
            name: name.clone(),
            reason: format!("could not spawn analyzer worker: {e}"),
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(tokens)) if tokens.is_empty() => Err(DependencyError::Failed {
            name,
            reason: "analyzer returned no tokens".into(),
        }),
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(DependencyError::Timeout {
            name,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
        Err(RecvTimeoutError::Disconnected) => Err(DependencyError::Failed {
            name,
            reason: "analyzer worker exited without a result".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permits_return_on_drop() {
        let gate = WorkerGate::new(2);
        let first = gate.try_acquire().unwrap();
        let _second = gate.try_acquire().unwrap();
        assert!(gate.try_acquire().is_none());
        assert_eq!(gate.in_flight(), 2);
        drop(first);
        assert_eq!(gate.in_flight(), 1);
        assert!(gate.try_acquire().is_some());
    }

    #[test]
    fn zero_limit_still_admits_one() {
        let gate = WorkerGate::new(0);
        assert_eq!(gate.limit(), 1);
        assert!(gate.try_acquire().is_some());
    }
}
