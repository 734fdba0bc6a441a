//! Conflict detection: item-by-actor outcome tables and pairwise goal
//! conflicts.
//!
//! Cells where the column's actor does not hold the row's item are marked
//! [`cogmap_core::models::CellValue::Missing`] — the actor has no belief
//! about it, which is different from a belief that nets out to zero.

mod actions;
mod goals;

pub use actions::action_conflict_table;
pub use goals::{goal_conflict_table, goal_conflicts};
