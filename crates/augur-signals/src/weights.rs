//! Static (group, choice) → allocation table.
//!
//! Every allocation distributes exactly 6.0 units over the eight trait
//! dimensions. Per-group shares follow one of three shapes: 3.6/1.8/0.6,
//! 3.0/2.0/1.0, or balanced 2.0/2.0/2.0.

use augur_core::models::{Choice, QuestionGroup, TraitVector};

/// One row of the weight table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPattern {
    pub group: QuestionGroup,
    pub choice: Choice,
    pub vector: TraitVector,
}

// Dimension order: heaven, thunder, water | lake, fire, wind | mountain, earth.
const GROUP_A: [[f64; 8]; 5] = [
    [1.5, 1.2, 0.9, 0.6, 0.6, 0.6, 0.3, 0.3],
    [1.2, 1.0, 0.8, 0.4, 0.3, 0.3, 1.0, 1.0],
    [0.7, 0.7, 0.6, 0.7, 0.7, 0.6, 1.0, 1.0],
    [0.8, 0.6, 0.6, 1.0, 1.0, 1.0, 0.5, 0.5],
    [0.2, 0.2, 0.2, 0.6, 0.6, 0.6, 1.8, 1.8],
];

const GROUP_B: [[f64; 8]; 5] = [
    [0.6, 0.6, 0.6, 1.4, 1.2, 1.0, 0.3, 0.3],
    [0.4, 0.3, 0.3, 1.0, 1.0, 1.0, 1.0, 1.0],
    [0.7, 0.7, 0.6, 0.6, 0.7, 0.7, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.8, 0.6, 0.6, 0.5, 0.5],
    [0.6, 0.6, 0.6, 0.2, 0.2, 0.2, 1.8, 1.8],
];

const GROUP_C: [[f64; 8]; 5] = [
    [0.6, 0.6, 0.6, 0.2, 0.2, 0.2, 2.0, 1.6],
    [0.4, 0.3, 0.3, 0.8, 0.6, 0.6, 1.4, 1.6],
    [0.7, 0.6, 0.7, 0.7, 0.6, 0.7, 1.0, 1.0],
    [0.4, 0.3, 0.3, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.2, 1.2, 1.2, 0.6, 0.6, 0.6, 0.3, 0.3],
];

/// Allocation vector for a validated (group, choice) pair.
pub fn lookup(group: QuestionGroup, choice: Choice) -> TraitVector {
    let table = match group {
        QuestionGroup::A => &GROUP_A,
        QuestionGroup::B => &GROUP_B,
        QuestionGroup::C => &GROUP_C,
    };
    TraitVector::clamped(table[usize::from(choice.get() - 1)])
}

/// All 15 rows, group-major.
pub fn all() -> impl Iterator<Item = ScoringPattern> {
    QuestionGroup::ALL.into_iter().flat_map(|group| {
        Choice::ALL.into_iter().map(move |choice| ScoringPattern {
            group,
            choice,
            vector: lookup(group, choice),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::constants::ALLOCATION_TOTAL;

    fn choice(n: u8) -> Choice {
        Choice::new(n).unwrap()
    }

    #[test]
    fn every_allocation_sums_to_total() {
        assert_eq!(all().count(), 15);
        for p in all() {
            assert!(
                (p.vector.sum() - ALLOCATION_TOTAL).abs() < 1e-9,
                "{:?}/{} sums to {}",
                p.group,
                p.choice.get(),
                p.vector.sum()
            );
        }
    }

    #[test]
    fn low_choices_favour_own_group() {
        for group in QuestionGroup::ALL {
            for n in [1, 2] {
                let shares = lookup(group, choice(n)).group_weights();
                assert_eq!(shares.dominant(), group, "{group:?} choice {n}");
            }
        }
    }

    #[test]
    fn middle_choice_is_balanced() {
        for group in QuestionGroup::ALL {
            let shares = lookup(group, choice(3)).group_weights();
            for g in QuestionGroup::ALL {
                assert!((shares.get(g) - 2.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn high_choices_shift_away() {
        for group in QuestionGroup::ALL {
            for n in [4, 5] {
                let shares = lookup(group, choice(n)).group_weights();
                assert_ne!(shares.dominant(), group, "{group:?} choice {n}");
            }
        }
    }

    #[test]
    fn group_shares_follow_a_known_shape() {
        let shapes: [[f64; 3]; 3] = [[3.6, 1.8, 0.6], [3.0, 2.0, 1.0], [2.0, 2.0, 2.0]];
        for p in all() {
            let g = p.vector.group_weights();
            let mut parts = [g.a, g.b, g.c];
            parts.sort_by(|a, b| b.total_cmp(a));
            let matches = shapes.iter().any(|shape| {
                shape
                    .iter()
                    .zip(parts.iter())
                    .all(|(s, v)| (s - v).abs() < 1e-9)
            });
            assert!(matches, "{:?}/{} has shape {parts:?}", p.group, p.choice.get());
        }
    }
}
