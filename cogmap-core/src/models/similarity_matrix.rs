use serde::{Deserialize, Serialize};

/// Actor-by-actor score matrix for one similarity metric.
///
/// Computed for all ordered pairs including self-pairs; the metrics
/// themselves are symmetric, so the matrix is too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    /// Row and column labels: actor identifiers.
    pub actors: Vec<String>,
    /// `scores[row][col]` = metric(actors[row], actors[col]).
    pub scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Score lookup by actor labels.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.actors.iter().position(|x| x == a)?;
        let col = self.actors.iter().position(|x| x == b)?;
        Some(self.scores[row][col])
    }
}
