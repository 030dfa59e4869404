//! Three-powers changing-line policy.
//!
//! Line positions map to the three powers: 1 and 4 to earth (group C),
//! 2 and 5 to the human place (group B), 3 and 6 to heaven (group A). Each
//! group's share deviation `d = share - 1/3` drives its two lines: a yang
//! line changes when `d <= -t`, a yin line when `d >= t`. Inner lines
//! (1-3) use the smaller threshold.

use augur_core::config::ChangingLineConfig;
use augur_core::constants::HEXAGRAM_LINES;
use augur_core::errors::ComputationError;
use augur_core::models::{HexagramId, QuestionGroup, SignalFeatures};
use augur_core::traits::IChangingLinePolicy;

/// Question group governing a line position (1-based).
fn line_group(position: u8) -> QuestionGroup {
    debug_assert!((1..=HEXAGRAM_LINES).contains(&position), "line {position}");
    match position.saturating_sub(1) % 3 {
        0 => QuestionGroup::C,
        1 => QuestionGroup::B,
        _ => QuestionGroup::A,
    }
}

#[derive(Debug, Clone)]
pub struct ThreePowersPolicy {
    inner_threshold: f64,
    outer_threshold: f64,
}

impl ThreePowersPolicy {
    pub fn new(config: &ChangingLineConfig) -> Self {
        Self {
            inner_threshold: config.inner_threshold,
            outer_threshold: config.outer_threshold,
        }
    }
}

impl Default for ThreePowersPolicy {
    fn default() -> Self {
        Self::new(&ChangingLineConfig::default())
    }
}

impl IChangingLinePolicy for ThreePowersPolicy {
    fn changing_lines(
        &self,
        winner: HexagramId,
        features: &SignalFeatures,
    ) -> Result<Vec<u8>, ComputationError> {
        let Some(shares) = features.group_shares else {
            return Ok(Vec::new());
        };
        if ![shares.a, shares.b, shares.c].iter().all(|s| s.is_finite()) {
            return Err(ComputationError::ChangingLinesFailed {
                reason: "group shares are not finite".into(),
            });
        }

        let lines = winner.lines();
        let changing = (1..=HEXAGRAM_LINES)
            .filter(|&position| {
                let deviation = shares.get(line_group(position)) - 1.0 / 3.0;
                let threshold = if position <= 3 {
                    self.inner_threshold
                } else {
                    self.outer_threshold
                };
                let yang = lines[usize::from(position - 1)];
                if yang {
                    deviation <= -threshold
                } else {
                    deviation >= threshold
                }
            })
            .collect();
        Ok(changing)
    }

    fn name(&self) -> &str {
        "three_powers"
    }
}
