//! Error types. Only [`ValidationError`] crosses the engine's public boundary;
//! everything else is absorbed into a degradation tier.

mod cache_error;
mod computation_error;
mod dependency_error;
mod validation_error;

pub use cache_error::CacheError;
pub use computation_error::ComputationError;
pub use dependency_error::DependencyError;
pub use validation_error::ValidationError;

/// Umbrella error for the Augur workspace.
#[derive(Debug, thiserror::Error)]
pub enum AugurError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("dependency error: {0}")]
    Dependency(#[from] DependencyError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AugurResult<T> = Result<T, AugurError>;
