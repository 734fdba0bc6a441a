//! Error types for the cogmap workspace.
//!
//! The analysis core itself has no fatal error path: absent relations,
//! missing paths, and empty comparison sets are all valid data-quality
//! conditions handled by convention. Errors here surface only from the
//! optional strict validation pass over the input records.

mod record_error;

pub use record_error::RecordError;

/// Umbrella error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CogmapError {
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result alias used across the workspace.
pub type CogmapResult<T> = Result<T, CogmapError>;
