//! Output table models handed to external renderers.
//!
//! The contract to the rendering side is numeric correctness plus an
//! explicit missing-value marker that can never be confused with a real 0.

mod cell;
mod conflict_table;
mod frequency;
mod similarity_matrix;

pub use cell::CellValue;
pub use conflict_table::ConflictTable;
pub use frequency::{FactorCount, FrequencyTable};
pub use similarity_matrix::SimilarityMatrix;
