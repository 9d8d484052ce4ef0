//! ONNX model validation
//!
//! Structural validation of models: no node input may reference a tensor
//! absent from {graph inputs, initializers, outputs of earlier nodes}. Used
//! to check that extracted subgraphs stand on their own.

use std::collections::HashSet;

use crate::proto::{GraphProto, ModelProto};

/// Validation result with detailed issues
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the model is valid
    pub is_valid: bool,
    /// List of errors (critical issues)
    pub errors: Vec<String>,
    /// List of warnings (non-critical issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
        self.is_valid = false;
    }

    /// Add a warning
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Merge with another result
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate an ONNX model
pub fn validate_model(model: &ModelProto) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if model.opset_import.is_empty() {
        result.add_warning("No opset imports specified");
    }

    match &model.graph {
        Some(graph) => {
            result.merge(validate_graph(graph));
        }
        None => {
            result.add_error("Model does not contain a graph");
        }
    }

    result
}

/// Validate a graph
pub fn validate_graph(graph: &GraphProto) -> ValidationResult {
    let mut result = ValidationResult::valid();

    // Collect all known tensor names
    let mut known_tensors: HashSet<&str> = HashSet::new();

    for input in &graph.input {
        if input.name.is_empty() {
            result.add_error("Graph input has empty name");
        } else {
            known_tensors.insert(&input.name);
        }
    }

    for init in &graph.initializer {
        if init.name.is_empty() {
            result.add_warning("Initializer has empty name");
        } else {
            known_tensors.insert(&init.name);
        }
    }

    // Validate nodes in order
    let mut node_outputs: HashSet<&str> = HashSet::new();

    for (idx, node) in graph.node.iter().enumerate() {
        if node.op_type.is_empty() {
            result.add_error(format!("Node {} has empty op_type", idx));
        }

        for input in &node.input {
            if !input.is_empty() && !known_tensors.contains(input.as_str()) {
                result.add_error(format!(
                    "Node '{}' references missing tensor '{}'",
                    node.name, input
                ));
            }
        }

        for output in &node.output {
            if output.is_empty() {
                continue;
            }
            if !node_outputs.insert(output) {
                result.add_error(format!("Duplicate node output tensor '{}'", output));
            }
            known_tensors.insert(output);
        }
    }

    // Declared outputs must be produced or known
    for output in &graph.output {
        if output.name.is_empty() {
            result.add_error("Graph output has empty name");
        } else if !known_tensors.contains(output.name.as_str()) {
            result.add_error(format!(
                "Graph output '{}' is not produced by any node",
                output.name
            ));
        }
    }

    result
}
