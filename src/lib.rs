//! # Subnetron
//!
//! ONNX subgraph extraction - carve a standalone, loadable model out of a
//! user-chosen subset of nodes.
//!
//! Given a source model and a list of node names (as produced by a graph
//! viewer such as netron), the extractor classifies every tensor crossing the
//! selection boundary as an external input, a preserved constant, or an
//! internal edge, computes the minimal output set, and assembles a new model
//! with no dangling references.
//!
//! ## Example
//!
//! ```ignore
//! use subnetron::prelude::*;
//!
//! let model = load_model("model.onnx")?;
//! let selection = vec![Some("node-name-conv_0".to_string())];
//! let subgraph = extract(&model, &selection)?;
//! save_model(&subgraph, "extracted_subgraph.onnx")?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod extract;
pub mod graph;
pub mod io;
pub mod proto;
pub mod server;
pub mod viewer;

/// Prelude module - import commonly used types with `use subnetron::prelude::*`
pub mod prelude {
    pub use crate::error::{ExtractError, ExtractResult};
    pub use crate::extract::{extract, extract_to_bytes, Boundary};
    pub use crate::graph::GraphIndex;
    pub use crate::io::{load_model, load_model_from_bytes, model_to_bytes, save_model};
    pub use crate::proto::onnx::*;
    pub use crate::server::{create_router, ServerState};
}

pub use error::{ExtractError, ExtractResult};
pub use extract::extract;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
