use serde::{Deserialize, Serialize};

use super::CellValue;

/// Item-by-actor outcome matrix.
///
/// Rows are distinct items (goal or action variables across all actors),
/// columns are actors, both in first-appearance order. Cells are
/// [`CellValue::Missing`] wherever the column's actor does not hold the
/// row's item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictTable {
    /// Row labels: item variable names.
    pub items: Vec<String>,
    /// Column labels: actor identifiers.
    pub actors: Vec<String>,
    /// `cells[row][col]` for (items[row], actors[col]).
    pub cells: Vec<Vec<CellValue>>,
}

impl ConflictTable {
    /// Cell lookup by labels. `None` when either label is unknown;
    /// a present but unheld cell is `Some(CellValue::Missing)`.
    pub fn get(&self, item: &str, actor: &str) -> Option<CellValue> {
        let row = self.items.iter().position(|i| i == item)?;
        let col = self.actors.iter().position(|a| a == actor)?;
        Some(self.cells[row][col])
    }
}
