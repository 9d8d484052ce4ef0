//! ONNX model writer
//!
//! Save ONNX models to files or bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prost::Message;

use crate::error::{ExtractError, ExtractResult};
use crate::proto::ModelProto;

/// Save an ONNX model to a file
pub fn save_model<P: AsRef<Path>>(model: &ModelProto, path: P) -> ExtractResult<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| {
        ExtractError::InvalidModel(format!("Failed to create file '{}': {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = model.encode_to_vec();

    writer.write_all(&bytes).map_err(|e| {
        ExtractError::InvalidModel(format!("Failed to write file '{}': {}", path.display(), e))
    })?;

    writer.flush().map_err(|e| {
        ExtractError::InvalidModel(format!("Failed to flush file '{}': {}", path.display(), e))
    })?;

    Ok(())
}

/// Encode an ONNX model to bytes
pub fn model_to_bytes(model: &ModelProto) -> Vec<u8> {
    model.encode_to_vec()
}

/// Calculate the size of an encoded model in bytes
pub fn model_size(model: &ModelProto) -> usize {
    model.encoded_len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::GraphProto;

    fn create_test_model() -> ModelProto {
        ModelProto {
            ir_version: 8,
            producer_name: "test".to_string(),
            graph: Some(GraphProto {
                name: "test_graph".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_model_to_bytes() {
        let model = create_test_model();
        let bytes = model_to_bytes(&model);

        assert!(!bytes.is_empty());

        // Verify we can decode it back
        let decoded = ModelProto::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.ir_version, 8);
    }

    #[test]
    fn test_model_size() {
        let model = create_test_model();
        assert_eq!(model_size(&model), model_to_bytes(&model).len());
    }

    #[test]
    fn test_save_and_load() {
        let model = create_test_model();
        let path = std::env::temp_dir().join("subnetron_writer_test.onnx");

        save_model(&model, &path).unwrap();

        let loaded = crate::io::load_model(&path).unwrap();
        assert_eq!(loaded.ir_version, 8);
        assert_eq!(loaded.producer_name, "test");

        std::fs::remove_file(&path).ok();
    }
}
