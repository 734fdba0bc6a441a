//! The per-actor signed digraph.

mod cognitive_map;

pub use cognitive_map::{CognitiveMap, FactorNode};
