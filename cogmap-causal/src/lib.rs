//! # cogmap-causal
//!
//! Per-actor cognitive-map graph engine. A [`CognitiveMap`] is one actor's
//! signed directed graph of belief variables and causal links, built once
//! from that actor's rows of the dataset and queried read-only afterwards:
//! path-effect scoring of an action against a goal, and the aggregate
//! action effect over all of the actor's goals.

pub mod effect;
pub mod graph;
pub mod traversal;

pub use graph::{CognitiveMap, FactorNode};
