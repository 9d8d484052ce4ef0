//! Boundary analysis
//!
//! Given the selected node set, classifies every tensor crossing the
//! selection boundary as an external input, a preserved constant, or an
//! internal edge, and determines the subgraph's output set.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::graph::GraphIndex;
use crate::proto::extensions::make_unknown_value_info;
use crate::proto::{tensor_proto, GraphProto, TensorProto, ValueInfoProto};

/// Operator kind whose sole function is to emit a literal tensor value
pub const CONSTANT_OP: &str = "Constant";

/// The three lists describing the selection boundary
///
/// Each list is free of duplicates and deterministic in order
/// (first-appearance order over the selected nodes).
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    /// Tensors the subgraph requires at runtime
    pub inputs: Vec<ValueInfoProto>,
    /// Tensors the subgraph exposes
    pub outputs: Vec<ValueInfoProto>,
    /// Constant tensors embedded in the subgraph
    pub initializers: Vec<TensorProto>,
}

/// Compute the boundary of a selected node set
///
/// `selected` holds node positions in source-document order. This function
/// cannot fail: it only produces (possibly empty) lists.
pub fn analyze(graph: &GraphProto, index: &GraphIndex, selected: &[usize]) -> Boundary {
    let selected_set: FxHashSet<usize> = selected.iter().copied().collect();
    let produced_by_selected = |name: &str| {
        index
            .producer_of(name)
            .is_some_and(|pos| selected_set.contains(&pos))
    };

    // 1. Internal/external input split: an input crosses the boundary unless
    //    its producer is itself selected.
    let mut external: IndexSet<String> = IndexSet::new();
    for &pos in selected {
        for input in &graph.node[pos].input {
            if !input.is_empty() && !produced_by_selected(input) {
                external.insert(input.clone());
            }
        }
    }

    // 2. Constant lifting from initializers: weights become embedded
    //    constants, not runtime inputs.
    let mut initializers: Vec<TensorProto> = Vec::new();
    external.retain(|name| match index.initializer(name) {
        Some(tensor) => {
            initializers.push(tensor.clone());
            false
        }
        None => true,
    });

    // 3. Constant lifting from Constant nodes: an unselected Constant feeding
    //    the boundary has its literal value inlined under the output tensor's
    //    name, so the node itself (and anything upstream of it) need not be
    //    pulled in. A selected Constant stays a node and is not duplicated as
    //    an initializer.
    for (pos, node) in graph.node.iter().enumerate() {
        if node.op_type != CONSTANT_OP || selected_set.contains(&pos) {
            continue;
        }
        for output in &node.output {
            if !external.contains(output.as_str()) {
                continue;
            }
            match node.get_attribute_tensor("value") {
                Some(value) => {
                    let mut tensor = value.clone();
                    // The subgraph references the tensor by the node's output
                    // name, whatever the literal itself was called.
                    tensor.name = output.clone();
                    initializers.push(tensor);
                    external.shift_remove(output.as_str());
                }
                None => {
                    // Skip policy: leave the tensor as an external input
                    // rather than failing the whole extraction.
                    warn!(
                        node = node.name.as_str(),
                        tensor = output.as_str(),
                        "Constant node has no tensor 'value' attribute, keeping external input"
                    );
                }
            }
        }
    }

    // 4. Output determination: produced names nobody inside consumes, plus
    //    produced names that are declared outputs of the source document
    //    (externally observable even when also consumed internally).
    let mut produced: IndexSet<&str> = IndexSet::new();
    for &pos in selected {
        for output in &graph.node[pos].output {
            if !output.is_empty() {
                produced.insert(output.as_str());
            }
        }
    }

    // A produced name is internally consumed when one of its consumers is
    // itself selected (its producer is selected by construction).
    let internally_consumed = |name: &str| {
        index
            .consumers_of(name)
            .into_iter()
            .flatten()
            .any(|pos| selected_set.contains(pos))
    };

    let output_names: Vec<&str> = produced
        .iter()
        .copied()
        .filter(|name| !internally_consumed(name) || index.is_declared_output(name))
        .collect();

    // 5. Type/shape annotation lookup with default fallback.
    let inputs: Vec<ValueInfoProto> = external
        .iter()
        .map(|name| resolve_annotation(index, name))
        .collect();
    let outputs: Vec<ValueInfoProto> = output_names
        .iter()
        .map(|name| resolve_annotation(index, name))
        .collect();

    debug!(
        inputs = ?inputs.iter().map(|vi| vi.name.as_str()).collect::<Vec<_>>(),
        outputs = ?output_names,
        initializers = ?initializers.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        "boundary classification"
    );

    Boundary {
        inputs,
        outputs,
        initializers,
    }
}

/// Resolve the declared annotation for a boundary tensor
///
/// Falls back to a float tensor of unknown shape when the source document
/// carries no value info for the name. The fallback weakens the type contract
/// of the extracted model, hence the warning.
fn resolve_annotation(index: &GraphIndex, name: &str) -> ValueInfoProto {
    match index.annotation_for(name) {
        Some(vi) => vi.clone(),
        None => {
            warn!(
                tensor = name,
                "no declared type/shape for boundary tensor, defaulting to float of unknown shape"
            );
            make_unknown_value_info(name, tensor_proto::DataType::Float as i32)
        }
    }
}
