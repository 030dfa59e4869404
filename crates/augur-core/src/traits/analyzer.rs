use crate::errors::DependencyError;
use crate::models::{PersonaEstimate, TextSignal};

/// Optional deep linguistic analyzer. May be slow, remote, or absent.
pub trait ILinguisticAnalyzer: Send + Sync {
    /// Split text into normalized tokens (lemmas where the analyzer supports them).
    fn tokenize(&self, text: &str) -> Result<Vec<String>, DependencyError>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool;
}

/// Optional persona mapper that refines keyword-based persona estimates.
pub trait IPersonaMapper: Send + Sync {
    /// Estimate personas for a signal, strongest first.
    fn map(&self, signal: &TextSignal) -> Result<Vec<PersonaEstimate>, DependencyError>;

    fn name(&self) -> &str;
}
