/// Optional collaborator missing, failing, or too slow. Handled by a local fallback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DependencyError {
    #[error("dependency unavailable: {name}")]
    Unavailable { name: String },

    #[error("dependency {name} timed out after {timeout_ms}ms")]
    Timeout { name: String, timeout_ms: u64 },

    #[error("dependency {name} busy: {limit} calls still running")]
    Saturated { name: String, limit: usize },

    #[error("dependency {name} failed: {reason}")]
    Failed { name: String, reason: String },
}
