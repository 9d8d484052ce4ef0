//! Subgraph assembly
//!
//! Builds the standalone model from the selected nodes and the boundary
//! lists. Purely structural: no renaming, no attribute rewriting, no
//! reordering. Correctness is the boundary analysis' responsibility.

use crate::proto::{GraphProto, ModelProto};

use super::boundary::Boundary;

/// Name given to the extracted graph
pub const EXTRACTED_GRAPH_NAME: &str = "extracted_subgraph";

/// Assemble the extracted model
///
/// Selected nodes are copied verbatim in source-document order. The source
/// model's `ir_version` and `opset_import` are carried over so the extracted
/// model loads under the same operator semantics.
pub fn assemble(model: &ModelProto, graph: &GraphProto, selected: &[usize], boundary: Boundary) -> ModelProto {
    let subgraph = GraphProto {
        node: selected.iter().map(|&pos| graph.node[pos].clone()).collect(),
        name: EXTRACTED_GRAPH_NAME.to_string(),
        input: boundary.inputs,
        output: boundary.outputs,
        initializer: boundary.initializers,
        ..Default::default()
    };

    ModelProto {
        ir_version: model.ir_version,
        opset_import: model.opset_import.clone(),
        producer_name: "subnetron".to_string(),
        producer_version: crate::VERSION.to_string(),
        graph: Some(subgraph),
        ..Default::default()
    }
}
