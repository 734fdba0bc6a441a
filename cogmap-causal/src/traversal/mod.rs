//! Simple-path enumeration and sign-multiplicative path products.

use petgraph::algo::all_simple_paths;
use petgraph::graph::NodeIndex;

use crate::graph::CognitiveMap;

/// All simple directed paths (no repeated nodes) between two nodes.
///
/// Empty when no path exists — a valid "no causal route" outcome, not an
/// error.
pub fn simple_paths(map: &CognitiveMap, from: NodeIndex, to: NodeIndex) -> Vec<Vec<NodeIndex>> {
    all_simple_paths::<Vec<_>, _>(map.raw(), from, to, 0, None).collect()
}

/// Product of the edge effects along one path, in path order.
///
/// Influence propagates multiplicatively: one negative link flips the net
/// sign of the whole path.
pub fn path_product(map: &CognitiveMap, path: &[NodeIndex]) -> f64 {
    let graph = map.raw();
    path.windows(2)
        .filter_map(|pair| graph.find_edge(pair[0], pair[1]))
        .map(|edge| graph[edge])
        .product()
}
