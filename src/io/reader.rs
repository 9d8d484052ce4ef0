//! ONNX model reader
//!
//! Load ONNX models from files or bytes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use prost::Message;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::ModelProto;

/// Load an ONNX model from a file path
///
/// # Example
///
/// ```ignore
/// use subnetron::io::load_model;
///
/// let model = load_model("model.onnx")?;
/// println!("Model IR version: {}", model.ir_version);
/// ```
pub fn load_model<P: AsRef<Path>>(path: P) -> ExtractResult<ModelProto> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        ExtractError::InvalidModel(format!("Failed to open file '{}': {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();

    reader.read_to_end(&mut buffer).map_err(|e| {
        ExtractError::InvalidModel(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    load_model_from_bytes(&buffer)
}

/// Load an ONNX model from bytes
pub fn load_model_from_bytes(bytes: &[u8]) -> ExtractResult<ModelProto> {
    ModelProto::decode(bytes)
        .map_err(|e| ExtractError::InvalidModel(format!("Failed to decode ONNX model: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{GraphProto, NodeProto, ValueInfoProto};

    fn create_test_model() -> ModelProto {
        ModelProto {
            ir_version: 8,
            producer_name: "test".to_string(),
            graph: Some(GraphProto {
                name: "test_graph".to_string(),
                node: vec![NodeProto {
                    op_type: "Relu".to_string(),
                    name: "relu_0".to_string(),
                    input: vec!["X".to_string()],
                    output: vec!["Y".to_string()],
                    ..Default::default()
                }],
                input: vec![ValueInfoProto {
                    name: "X".to_string(),
                    ..Default::default()
                }],
                output: vec![ValueInfoProto {
                    name: "Y".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_from_bytes() {
        let model = create_test_model();
        let bytes = model.encode_to_vec();

        let loaded = load_model_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.ir_version, 8);
        assert_eq!(loaded.producer_name, "test");
    }

    #[test]
    fn test_load_invalid_bytes() {
        let result = load_model_from_bytes(&[0, 1, 2, 3]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_model("/nonexistent/model.onnx");
        assert!(result.is_err());
    }
}
