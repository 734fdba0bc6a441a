//! Workspace configuration types.

mod analysis_config;

pub use analysis_config::AnalysisConfig;
