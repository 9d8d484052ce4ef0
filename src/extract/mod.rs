//! Subgraph extraction pipeline
//!
//! The single public operation of the crate: resolve a raw node selection
//! against a source model and assemble a standalone model from it.
//!
//! Pipeline: raw selection → [`selection::resolve_selection`] →
//! [`boundary::analyze`] (consulting [`crate::graph::GraphIndex`]) →
//! [`assemble::assemble`] → serialized output buffer.

pub mod assemble;
pub mod boundary;
pub mod selection;

pub use assemble::{assemble, EXTRACTED_GRAPH_NAME};
pub use boundary::{analyze, Boundary, CONSTANT_OP};
pub use selection::{resolve_selection, UI_NODE_PREFIX};

use prost::Message;

use crate::error::{ExtractError, ExtractResult};
use crate::graph::GraphIndex;
use crate::proto::ModelProto;

/// Extract a standalone subgraph model from a node selection
///
/// The source model is only read; each call is self-contained and safe to
/// retry wholesale. Selection tokens may be null, empty, duplicated, or
/// unresolvable; the call fails with [`ExtractError::SelectionEmpty`] only
/// when nothing resolves at all.
pub fn extract(model: &ModelProto, selection: &[Option<String>]) -> ExtractResult<ModelProto> {
    let graph = model
        .graph
        .as_ref()
        .ok_or_else(|| ExtractError::MissingField("model.graph".to_string()))?;

    let index = GraphIndex::new(graph);
    let selected = resolve_selection(graph, selection)?;
    let boundary = analyze(graph, &index, &selected);

    Ok(assemble(model, graph, &selected, boundary))
}

/// Extract and serialize in one step
///
/// The returned buffer is caller-owned; nothing is written to disk.
pub fn extract_to_bytes(model: &ModelProto, selection: &[Option<String>]) -> ExtractResult<Vec<u8>> {
    let extracted = extract(model, selection)?;
    Ok(extracted.encode_to_vec())
}
