//! Aggregate tables: pairwise actor×actor matrices for any similarity
//! metric, and the most-occurring-factor histogram.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use cogmap_core::models::{FactorCount, FrequencyTable, SimilarityMatrix};
use cogmap_core::records::{Dataset, FactorKind};

/// Actor×actor score matrix for one similarity metric.
///
/// Computed for all ordered pairs including self-pairs; pairs for one row
/// actor fan out over rayon since the metric is read-only over the
/// dataset.
///
/// # Examples
///
/// ```
/// use cogmap_analysis::{factor_similarity, pairwise_table};
/// use cogmap_core::records::Dataset;
///
/// let data = Dataset::new(vec![], vec![]);
/// let table = pairwise_table(&data, factor_similarity);
/// assert!(table.actors.is_empty());
/// ```
pub fn pairwise_table<M>(data: &Dataset, metric: M) -> SimilarityMatrix
where
    M: Fn(&Dataset, &str, &str) -> f64 + Sync,
{
    let actors = data.actors();
    let scores: Vec<Vec<f64>> = actors
        .par_iter()
        .map(|p1| actors.iter().map(|p2| metric(data, p1, p2)).collect())
        .collect();

    debug!(actors = actors.len(), "pairwise table built");
    SimilarityMatrix {
        actors: actors.into_iter().map(String::from).collect(),
        scores,
    }
}

/// Frequency of each variable name across all factor records, optionally
/// filtered by kind. Sorted by descending count, ties by ascending name
/// so the output is deterministic.
pub fn most_occurring_factors(data: &Dataset, kind: Option<&FactorKind>) -> FrequencyTable {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for factor in data.factors() {
        if kind.map_or(true, |k| factor.kind == *k) {
            *counts.entry(factor.variable.as_str()).or_default() += 1;
        }
    }

    let mut entries: Vec<FactorCount> = counts
        .into_iter()
        .map(|(variable, count)| FactorCount {
            variable: variable.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|x, y| y.count.cmp(&x.count).then_with(|| x.variable.cmp(&y.variable)));

    FrequencyTable { entries }
}
