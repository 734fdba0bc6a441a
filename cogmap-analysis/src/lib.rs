//! # cogmap-analysis
//!
//! Cross-actor analysis over the immutable dataset: pairwise belief
//! similarity, goal and action conflict tables, and aggregate
//! actor×actor tables. All builders are pure batch computations; the
//! outer actor/pair loops fan out over rayon since every cell is
//! read-only over the shared dataset.

pub mod aggregate;
pub mod conflict;
pub mod similarity;

pub use aggregate::{most_occurring_factors, pairwise_table};
pub use conflict::{action_conflict_table, goal_conflict_table, goal_conflicts};
pub use similarity::{
    action_similarity, causality_similarity, factor_similarity, format_percent, goal_similarity,
    overlap_similarity,
};
