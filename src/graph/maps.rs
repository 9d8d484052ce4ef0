//! Graph map types and builders
//!
//! Defines the lookup structures used during boundary analysis.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::proto::{GraphProto, TensorProto, ValueInfoProto};

/// Type alias for producer map: output tensor name → producing node position
pub type ProducerMap = FxHashMap<String, usize>;

/// Type alias for consumer map: tensor name → [consumer node positions]
/// SmallVec optimized for common case of 1-4 consumers
pub type ConsumerMap = FxHashMap<String, SmallVec<[usize; 4]>>;

/// Type alias for initializer map: name → TensorProto
pub type InitializerMap = FxHashMap<String, TensorProto>;

/// Type alias for value info map: name → ValueInfoProto
pub type ValueInfoMap = FxHashMap<String, ValueInfoProto>;

/// Build producer map from graph nodes
///
/// Maps each output tensor name to the position of the node that produces it.
/// A valid document has at most one producer per tensor name; when a name is
/// seen twice the first registration wins and the name is reported back so the
/// caller can surface the defect.
pub fn build_producer_map(graph: &GraphProto) -> (ProducerMap, Vec<String>) {
    let mut map = FxHashMap::default();
    let mut duplicates = Vec::new();

    for (pos, node) in graph.node.iter().enumerate() {
        for output in &node.output {
            if output.is_empty() {
                continue;
            }
            if map.contains_key(output) {
                duplicates.push(output.clone());
            } else {
                map.insert(output.clone(), pos);
            }
        }
    }

    (map, duplicates)
}

/// Build consumer map from graph nodes
///
/// Maps each tensor name to the positions of the nodes that consume it.
pub fn build_consumer_map(graph: &GraphProto) -> ConsumerMap {
    let mut map: ConsumerMap = FxHashMap::default();

    for (pos, node) in graph.node.iter().enumerate() {
        for input in &node.input {
            if !input.is_empty() {
                map.entry(input.clone()).or_default().push(pos);
            }
        }
    }

    map
}

/// Build initializer map from graph
pub fn build_initializer_map(graph: &GraphProto) -> InitializerMap {
    graph
        .initializer
        .iter()
        .map(|t| (t.name.clone(), t.clone()))
        .collect()
}

/// Build a value info map from one value-info list
pub fn build_value_info_map(infos: &[ValueInfoProto]) -> ValueInfoMap {
    infos
        .iter()
        .map(|vi| (vi.name.clone(), vi.clone()))
        .collect()
}

/// Collect the set of tensor names declared as the graph's own outputs
pub fn build_declared_outputs(graph: &GraphProto) -> FxHashSet<String> {
    graph.output.iter().map(|vi| vi.name.clone()).collect()
}
