//! Goal-direction table and pairwise goal-conflict detection.

use tracing::instrument;

use cogmap_core::models::{CellValue, ConflictTable};
use cogmap_core::records::{sign, Dataset, FactorKind};

/// Goal-by-actor table of declared directions, raw and untransformed.
///
/// A goal held without a declared direction also maps to `Missing`: the
/// actor has stated no polarity to report. Strict validation rejects such
/// records up front.
#[instrument(skip(data))]
pub fn goal_conflict_table(data: &Dataset) -> ConflictTable {
    let actors = data.actors();
    let items = data.distinct_variables(Some(&FactorKind::Goal));

    let cells = items
        .iter()
        .map(|item| {
            actors
                .iter()
                .map(|actor| {
                    if !data.holds(actor, item) {
                        return CellValue::Missing;
                    }
                    match data.direction_of(actor, item) {
                        Some(direction) => CellValue::Value(direction),
                        None => CellValue::Missing,
                    }
                })
                .collect()
        })
        .collect();

    ConflictTable {
        items: items.into_iter().map(String::from).collect(),
        actors: actors.into_iter().map(String::from).collect(),
        cells,
    }
}

/// Goals held by both actors whose declared directions point opposite
/// ways. Compared by sign, so +0.5 and +1.0 do not conflict.
pub fn goal_conflicts(data: &Dataset, a: &str, b: &str) -> Vec<String> {
    data.goals_of(a)
        .into_iter()
        .filter(|g| data.goals_of(b).contains(g))
        .filter(|g| {
            match (data.direction_of(a, g), data.direction_of(b, g)) {
                (Some(da), Some(db)) => sign(da) != sign(db),
                // Either side undeclared: no polarity to disagree on.
                _ => false,
            }
        })
        .map(String::from)
        .collect()
}
