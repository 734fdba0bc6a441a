//! Causal effect queries over a built cognitive map.
//!
//! Scoring: each simple path from an action to a goal contributes +1 when
//! the sign of its effect product matches the sign of the goal's declared
//! direction, −1 otherwise. The per-goal score is the sum over all simple
//! paths — an actor with many corroborating paths scores higher than one
//! with a single path.
//!
//! Worked example: edges A→B (+1) and B→C (−1) give one simple path A→C
//! with product −1; if goal C declares direction −1, the score is +1.

use tracing::{debug, instrument};

use cogmap_core::records::sign;

use crate::graph::CognitiveMap;
use crate::traversal;

impl CognitiveMap {
    /// Net support score of `action` for `goal` across all simple paths.
    ///
    /// 0 when either endpoint is absent, the goal declares no direction,
    /// no path exists, or `action == goal` (a variable is not considered
    /// a causal route to itself) — all neutral outcomes, never errors.
    pub fn path_effect(&self, action: &str, goal: &str) -> i64 {
        if action == goal {
            return 0;
        }
        let (Some(from), Some(to)) = (self.get_node(action), self.get_node(goal)) else {
            return 0;
        };
        let Some(direction) = self.direction_sign(goal) else {
            return 0;
        };

        let mut score = 0;
        for path in traversal::simple_paths(self, from, to) {
            let product = traversal::path_product(self, &path);
            score += if sign(product) == direction { 1 } else { -1 };
        }
        score
    }

    /// Net belief that performing `action` serves all of this actor's
    /// goals at once: the sum of [`Self::path_effect`] over every goal
    /// held in the map.
    #[instrument(skip(self), fields(actor = %self.actor()))]
    pub fn total_action_effect(&self, action: &str) -> i64 {
        let total = self
            .goals()
            .iter()
            .map(|goal| self.path_effect(action, goal))
            .sum();
        debug!(action, total, "total action effect");
        total
    }
}
