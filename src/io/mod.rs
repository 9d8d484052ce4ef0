//! ONNX I/O module
//!
//! Loading, saving, and structural validation of ONNX models.

pub mod reader;
pub mod validation;
pub mod writer;

// Re-exports
pub use reader::{load_model, load_model_from_bytes};
pub use validation::{validate_graph, validate_model, ValidationResult};
pub use writer::{model_size, model_to_bytes, save_model};
