use crate::errors::ComputationError;
use crate::models::{HexagramId, SignalFeatures};

/// Decides which line positions (1..=6) of the winner are changing.
pub trait IChangingLinePolicy: Send + Sync {
    fn changing_lines(
        &self,
        winner: HexagramId,
        features: &SignalFeatures,
    ) -> Result<Vec<u8>, ComputationError>;

    fn name(&self) -> &str;
}
