//! Factor records: one belief-variable held by one actor.

use serde::{Deserialize, Serialize};

/// The kind of belief a factor represents.
///
/// The source data's type column is an open set, so labels beyond the three
/// canonical kinds round-trip through [`FactorKind::Other`] instead of
/// failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Goal,
    Action,
    State,
    Other(String),
}

/// One belief-variable held by one actor.
///
/// The same `variable` name across actors refers to the same concept.
/// `direction` is the desired polarity of a goal (+1.0 / −1.0) and is
/// `None` for non-goal factors.
///
/// # Examples
///
/// ```
/// use cogmap_core::records::{Factor, FactorKind};
///
/// let growth = Factor {
///     variable: "Growth".to_string(),
///     kind: FactorKind::Goal,
///     actor: "P1".to_string(),
///     direction: Some(1.0),
/// };
/// assert!(growth.is_goal());
/// assert_eq!(growth.direction_sign(), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Variable name, shared across actors.
    pub variable: String,
    /// Goal, action, state, or an uninterpreted label from the source data.
    pub kind: FactorKind,
    /// Identifier of the actor holding this belief.
    pub actor: String,
    /// Desired polarity; meaningful only when `kind` is `Goal`.
    pub direction: Option<f64>,
}

impl Factor {
    pub fn is_goal(&self) -> bool {
        self.kind == FactorKind::Goal
    }

    pub fn is_action(&self) -> bool {
        self.kind == FactorKind::Action
    }

    /// Sign of the declared direction, `None` when no direction is declared.
    pub fn direction_sign(&self) -> Option<f64> {
        self.direction.map(crate::records::sign)
    }
}
