//! # cogmap-core
//!
//! Foundation crate for the cogmap workspace.
//! Defines the input records (factors, relations), the read-only [`Dataset`]
//! view over them, the output table models, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod records;

// Re-export the most commonly used types at the crate root.
pub use config::AnalysisConfig;
pub use errors::{CogmapError, CogmapResult};
pub use models::{CellValue, ConflictTable, FrequencyTable, SimilarityMatrix};
pub use records::{Dataset, Factor, FactorKind, Relation};
