//! Set-overlap (Jaccard) similarity between two actors' variable sets.
//!
//! Score: `|A ∩ B| / |A ∪ B| × 100`, in [0, 100]. The self-pair scores
//! 100 whenever the actor holds at least one factor of the filtered kind;
//! an empty union scores 0 by convention.

use std::collections::HashSet;

use cogmap_core::records::{Dataset, FactorKind};

/// Jaccard percentage between the two actors' variable sets, optionally
/// filtered to one factor kind.
pub fn overlap_similarity(data: &Dataset, a: &str, b: &str, kind: Option<&FactorKind>) -> f64 {
    let set_a: HashSet<&str> = data.variables_of(a, kind).into_iter().collect();
    let set_b: HashSet<&str> = data.variables_of(b, kind).into_iter().collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let shared = set_a.intersection(&set_b).count();
    shared as f64 / union as f64 * 100.0
}

/// Overlap of the two actors' full factor sets.
pub fn factor_similarity(data: &Dataset, a: &str, b: &str) -> f64 {
    overlap_similarity(data, a, b, None)
}

/// Overlap of the two actors' goal sets.
pub fn goal_similarity(data: &Dataset, a: &str, b: &str) -> f64 {
    overlap_similarity(data, a, b, Some(&FactorKind::Goal))
}

/// Overlap of the two actors' action sets.
pub fn action_similarity(data: &Dataset, a: &str, b: &str) -> f64 {
    overlap_similarity(data, a, b, Some(&FactorKind::Action))
}
