//! Pairwise belief-similarity metrics.
//!
//! Every metric is symmetric, bounded, and total: empty or disjoint inputs
//! score 0 by convention rather than dividing by zero.

mod causality;
mod overlap;

pub use causality::causality_similarity;
pub use overlap::{action_similarity, factor_similarity, goal_similarity, overlap_similarity};

/// Render a percentage score the way the reporting pipeline prints it.
///
/// ```
/// assert_eq!(cogmap_analysis::format_percent(50.0), "50.00%");
/// ```
pub fn format_percent(score: f64) -> String {
    format!("{score:.2}%")
}
