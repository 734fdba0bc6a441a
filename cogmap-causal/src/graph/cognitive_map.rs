//! One actor's cognitive map: a petgraph digraph plus a name→index map.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use cogmap_core::records::{Dataset, Factor, FactorKind, Relation};

/// Node payload: one belief variable of the owning actor.
///
/// `kind` and `direction` are `None` for variables that appear only as a
/// relation endpoint without a declared factor record — relations
/// auto-create their endpoints, matching the source pipeline's behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorNode {
    pub variable: String,
    pub kind: Option<FactorKind>,
    pub direction: Option<f64>,
}

/// One actor's signed directed graph of causal beliefs.
///
/// Immutable after construction; every query is read-only, so any number
/// of maps (one per actor) coexist with no shared state. Duplicate
/// (from, to) relations resolve first-record-wins.
#[derive(Debug, Clone)]
pub struct CognitiveMap {
    actor: String,
    graph: DiGraph<FactorNode, f64>,
    index: HashMap<String, NodeIndex>,
}

impl CognitiveMap {
    /// Build the map for one actor from the full dataset.
    pub fn for_actor(data: &Dataset, actor: &str) -> Self {
        let factors: Vec<&Factor> = data.factors_of(actor).collect();
        let relations: Vec<&Relation> = data.relations_of(actor).collect();
        Self::from_records(actor, &factors, &relations)
    }

    /// Build the map from one actor's factor and relation rows.
    pub fn from_records(actor: &str, factors: &[&Factor], relations: &[&Relation]) -> Self {
        let mut map = Self {
            actor: actor.to_string(),
            graph: DiGraph::new(),
            index: HashMap::new(),
        };

        for factor in factors {
            let idx = map.ensure_node(&factor.variable);
            let node = &mut map.graph[idx];
            // First factor record wins; later duplicates don't overwrite.
            if node.kind.is_none() {
                node.kind = Some(factor.kind.clone());
                node.direction = factor.direction;
            }
        }

        for relation in relations {
            let from = map.ensure_node(&relation.from);
            let to = map.ensure_node(&relation.to);
            if map.graph.find_edge(from, to).is_none() {
                map.graph.add_edge(from, to, relation.effect);
            }
        }

        debug!(
            actor = %map.actor,
            nodes = map.graph.node_count(),
            edges = map.graph.edge_count(),
            "cognitive map built"
        );
        map
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Node index for a variable name, if present.
    pub fn get_node(&self, variable: &str) -> Option<NodeIndex> {
        self.index.get(variable).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Declared direction sign of a variable: −1.0/0.0/+1.0, or `None`
    /// when the variable is absent or carries no direction.
    pub fn direction_sign(&self, variable: &str) -> Option<f64> {
        let idx = self.get_node(variable)?;
        self.graph[idx].direction.map(cogmap_core::records::sign)
    }

    /// Distinct goal variables held in this map.
    pub fn goals(&self) -> Vec<&str> {
        self.graph
            .node_weights()
            .filter(|n| n.kind == Some(FactorKind::Goal))
            .map(|n| n.variable.as_str())
            .collect()
    }

    /// Read-only node iteration for external renderers.
    pub fn nodes(&self) -> impl Iterator<Item = &FactorNode> {
        self.graph.node_weights()
    }

    /// Read-only weighted-edge iteration for external renderers:
    /// (from variable, to variable, signed effect).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edge_indices().filter_map(move |e| {
            let (from, to) = self.graph.edge_endpoints(e)?;
            let weight = *self.graph.edge_weight(e)?;
            Some((
                self.graph[from].variable.as_str(),
                self.graph[to].variable.as_str(),
                weight,
            ))
        })
    }

    /// The underlying petgraph digraph, for traversal algorithms.
    pub(crate) fn raw(&self) -> &DiGraph<FactorNode, f64> {
        &self.graph
    }

    fn ensure_node(&mut self, variable: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(variable) {
            return *idx;
        }
        let idx = self.graph.add_node(FactorNode {
            variable: variable.to_string(),
            kind: None,
            direction: None,
        });
        self.index.insert(variable.to_string(), idx);
        idx
    }
}
