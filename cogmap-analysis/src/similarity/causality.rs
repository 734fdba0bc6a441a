//! Causality similarity — do two actors agree on the causal wiring of the
//! beliefs they share?
//!
//! Formula: over every ordered pair `(from, to)`, `from ≠ to`, drawn from
//! the intersection of the two actors' variable sets, compare the sign
//! each actor assigns to the relation `from → to` (0 when the actor has no
//! such relation — a valid "no belief", not missing data). The score is
//! `agreements / ordered pairs`, in [0, 1].
//!
//! Two actors sharing variables {A, B, C} give 6 ordered pairs; if they
//! agree on 4 of them the score is 4/6 ≈ 0.667. Fewer than two shared
//! variables means zero ordered pairs, defined as 0.

use std::collections::HashSet;

use tracing::debug;

use cogmap_core::records::Dataset;

/// Fraction of shared-variable ordered pairs where both actors record the
/// same relation sign.
pub fn causality_similarity(data: &Dataset, a: &str, b: &str) -> f64 {
    let set_a: HashSet<&str> = data.variables_of(a, None).into_iter().collect();
    let set_b: HashSet<&str> = data.variables_of(b, None).into_iter().collect();
    let shared: Vec<&str> = set_a.intersection(&set_b).copied().collect();

    let mut total = 0_usize;
    let mut agreements = 0_usize;
    for from in &shared {
        for to in &shared {
            if from == to {
                continue;
            }
            total += 1;
            if data.relation_sign(a, from, to) == data.relation_sign(b, from, to) {
                agreements += 1;
            }
        }
    }

    if total == 0 {
        return 0.0;
    }
    debug!(a, b, agreements, total, "causality similarity");
    agreements as f64 / total as f64
}
