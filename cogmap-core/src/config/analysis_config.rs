//! Configuration for dataset validation strictness.
//!
//! # Examples
//!
//! ```
//! use cogmap_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! assert!(!config.reject_duplicate_factors);
//! assert!(!config.enforce_declared_endpoints);
//! ```

use serde::{Deserialize, Serialize};

/// Strictness toggles for the input records.
///
/// With everything off (the default), the engine tolerates the source-data
/// laxities the same way the spreadsheet pipeline did: duplicate records
/// resolve first-match-wins and relation endpoints may introduce graph
/// nodes that were never declared as factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reject a second factor record for the same (actor, variable). Default: false.
    pub reject_duplicate_factors: bool,
    /// Reject a second relation record for the same (actor, from, to). Default: false.
    pub reject_duplicate_relations: bool,
    /// Require every relation endpoint to appear in the owning actor's
    /// factor set. Default: false.
    pub enforce_declared_endpoints: bool,
    /// Require every goal-typed factor to carry a direction. Default: false.
    pub require_goal_directions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_factors: false,
            reject_duplicate_relations: false,
            enforce_declared_endpoints: false,
            require_goal_directions: false,
        }
    }
}

impl AnalysisConfig {
    /// All strictness toggles on.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_factors: true,
            reject_duplicate_relations: true,
            enforce_declared_endpoints: true,
            require_goal_directions: true,
        }
    }
}
