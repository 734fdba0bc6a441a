//! Relation records: one actor's belief in a signed causal link.

use serde::{Deserialize, Serialize};

/// A directed causal link between two of an actor's variables.
///
/// `effect` is the signed weight of the influence: a negative value means
/// the source suppresses the target. Influence composes multiplicatively
/// along a path, so a single negative link flips the net sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Source variable name.
    pub from: String,
    /// Target variable name.
    pub to: String,
    /// Signed causal weight.
    pub effect: f64,
    /// Identifier of the actor holding this belief.
    pub actor: String,
}

impl Relation {
    /// Sign of the causal weight.
    pub fn sign(&self) -> f64 {
        crate::records::sign(self.effect)
    }
}
