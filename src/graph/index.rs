//! Graph index for subgraph extraction
//!
//! `GraphIndex` bundles the read-only lookup structures built in one pass
//! over the source graph: producer map, consumer map, initializer map,
//! declared-output set, and the per-category value-info maps used for
//! boundary annotation lookup.

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::proto::{GraphProto, TensorProto, ValueInfoProto};

use super::maps::{
    build_consumer_map, build_declared_outputs, build_initializer_map, build_producer_map,
    build_value_info_map, ConsumerMap, InitializerMap, ProducerMap, ValueInfoMap,
};

/// Read-only lookup structures over a source graph
///
/// Purely derived views; the source graph is never mutated. Built fresh per
/// extraction call, no state survives between calls.
#[derive(Debug)]
pub struct GraphIndex {
    /// Maps output tensor name → producing node position
    pub producer_map: ProducerMap,

    /// Maps tensor name → consumer node positions
    pub consumer_map: ConsumerMap,

    /// Maps initializer name → TensorProto
    pub initializer_map: InitializerMap,

    /// Tensor names declared as the graph's own outputs
    pub declared_outputs: FxHashSet<String>,

    /// Maps graph input name → ValueInfoProto
    pub graph_input_map: ValueInfoMap,

    /// Maps graph output name → ValueInfoProto
    pub graph_output_map: ValueInfoMap,

    /// Maps intermediate tensor name → ValueInfoProto
    pub value_info_map: ValueInfoMap,

    /// Output names registered by more than one node (source-document defect)
    pub duplicate_outputs: Vec<String>,
}

impl GraphIndex {
    /// Build the index from a source graph
    ///
    /// Duplicate producer registrations keep the first producer; the
    /// offending names are recorded in `duplicate_outputs` and logged.
    pub fn new(graph: &GraphProto) -> Self {
        let (producer_map, duplicate_outputs) = build_producer_map(graph);

        for name in &duplicate_outputs {
            warn!(
                tensor = name.as_str(),
                "output tensor produced by more than one node, keeping first producer"
            );
        }

        Self {
            producer_map,
            consumer_map: build_consumer_map(graph),
            initializer_map: build_initializer_map(graph),
            declared_outputs: build_declared_outputs(graph),
            graph_input_map: build_value_info_map(&graph.input),
            graph_output_map: build_value_info_map(&graph.output),
            value_info_map: build_value_info_map(&graph.value_info),
            duplicate_outputs,
        }
    }

    /// Get the position of the node producing a tensor
    pub fn producer_of(&self, tensor_name: &str) -> Option<usize> {
        self.producer_map.get(tensor_name).copied()
    }

    /// Get the positions of the nodes consuming a tensor
    pub fn consumers_of(&self, tensor_name: &str) -> Option<&[usize]> {
        self.consumer_map.get(tensor_name).map(|v| v.as_slice())
    }

    /// Get initializer by name
    pub fn initializer(&self, name: &str) -> Option<&TensorProto> {
        self.initializer_map.get(name)
    }

    /// Check if a tensor is an initializer
    pub fn is_initializer(&self, name: &str) -> bool {
        self.initializer_map.contains_key(name)
    }

    /// Check if a tensor is a declared output of the source graph
    pub fn is_declared_output(&self, name: &str) -> bool {
        self.declared_outputs.contains(name)
    }

    /// Look up the declared type/shape annotation for a tensor
    ///
    /// Searches graph inputs, then graph outputs, then intermediate
    /// value_info. `None` means the caller must synthesize a default.
    pub fn annotation_for(&self, name: &str) -> Option<&ValueInfoProto> {
        self.graph_input_map
            .get(name)
            .or_else(|| self.graph_output_map.get(name))
            .or_else(|| self.value_info_map.get(name))
    }
}
