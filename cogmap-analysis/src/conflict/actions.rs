//! Action-by-actor table of total action effects.

use rayon::prelude::*;
use tracing::instrument;

use cogmap_causal::CognitiveMap;
use cogmap_core::models::{CellValue, ConflictTable};
use cogmap_core::records::{Dataset, FactorKind};

/// Action-by-actor table where each held cell is the actor's
/// `total_action_effect` for that action.
///
/// One cognitive map is built per actor and reused across every row of
/// that actor's column, so all of an actor's cells are computed against
/// the same graph snapshot. Columns are independent and computed in
/// parallel.
#[instrument(skip(data))]
pub fn action_conflict_table(data: &Dataset) -> ConflictTable {
    let actors = data.actors();
    let items = data.distinct_variables(Some(&FactorKind::Action));

    // One column per actor, fanned out over rayon, then transposed into
    // row-major cells.
    let columns: Vec<Vec<CellValue>> = actors
        .par_iter()
        .map(|actor| {
            let map = CognitiveMap::for_actor(data, actor);
            items
                .iter()
                .map(|item| {
                    if data.holds(actor, item) {
                        CellValue::Value(map.total_action_effect(item) as f64)
                    } else {
                        CellValue::Missing
                    }
                })
                .collect()
        })
        .collect();

    let cells = (0..items.len())
        .map(|row| columns.iter().map(|col| col[row]).collect())
        .collect();

    ConflictTable {
        items: items.into_iter().map(String::from).collect(),
        actors: actors.into_iter().map(String::from).collect(),
        cells,
    }
}
