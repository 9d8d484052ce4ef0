//! Extension methods for ONNX protobuf types
//!
//! Provides convenient helper methods for working with ONNX protobuf types.

use super::onnx::*;

// ============================================================================
// ModelProto extensions
// ============================================================================

impl ModelProto {
    /// Get the opset version for the default domain
    pub fn get_opset_version(&self) -> Option<i64> {
        self.opset_import
            .iter()
            .find(|op| op.domain.is_empty())
            .map(|op| op.version)
    }

    /// Check if the model has a graph
    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }
}

// ============================================================================
// NodeProto extensions
// ============================================================================

impl NodeProto {
    /// Get attribute by name
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeProto> {
        self.attribute.iter().find(|attr| attr.name == name)
    }

    /// Get the literal tensor carried by a tensor-kind attribute
    pub fn get_attribute_tensor(&self, name: &str) -> Option<&TensorProto> {
        self.get_attribute(name).and_then(|a| a.t.as_ref())
    }

    /// Check if this node has a specific op type
    pub fn is_op_type(&self, op_type: &str) -> bool {
        self.op_type == op_type
    }
}

// ============================================================================
// ValueInfoProto extensions
// ============================================================================

impl ValueInfoProto {
    /// Get the shape dimensions if available
    ///
    /// Symbolic and absent dimensions are reported as -1.
    pub fn get_shape(&self) -> Option<Vec<i64>> {
        self.r#type.as_ref().and_then(|t| {
            t.value.as_ref().and_then(|v| match v {
                type_proto::Value::TensorType(tensor) => tensor.shape.as_ref().map(|s| {
                    s.dim
                        .iter()
                        .map(|d| match &d.value {
                            Some(tensor_shape_proto::dimension::Value::DimValue(v)) => *v,
                            Some(tensor_shape_proto::dimension::Value::DimParam(_)) => -1,
                            None => -1,
                        })
                        .collect()
                }),
                _ => None,
            })
        })
    }

    /// Get the element type if this is a tensor type
    pub fn get_elem_type(&self) -> Option<i32> {
        self.r#type.as_ref().and_then(|t| {
            t.value.as_ref().and_then(|v| match v {
                type_proto::Value::TensorType(tensor) => Some(tensor.elem_type),
                _ => None,
            })
        })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Create a new ValueInfoProto for a tensor
pub fn make_tensor_value_info(name: &str, elem_type: i32, shape: &[i64]) -> ValueInfoProto {
    ValueInfoProto {
        name: name.to_string(),
        r#type: Some(TypeProto {
            value: Some(type_proto::Value::TensorType(type_proto::Tensor {
                elem_type,
                shape: Some(TensorShapeProto {
                    dim: shape
                        .iter()
                        .map(|&d| tensor_shape_proto::Dimension {
                            value: Some(tensor_shape_proto::dimension::Value::DimValue(d)),
                            denotation: String::new(),
                        })
                        .collect(),
                }),
            })),
            denotation: String::new(),
        }),
        doc_string: String::new(),
    }
}

/// Create a ValueInfoProto with an unconstrained shape and the given element type
///
/// Used when no declared annotation exists for a boundary tensor. The shape is
/// left absent entirely, which ONNX treats as unknown rank.
pub fn make_unknown_value_info(name: &str, elem_type: i32) -> ValueInfoProto {
    ValueInfoProto {
        name: name.to_string(),
        r#type: Some(TypeProto {
            value: Some(type_proto::Value::TensorType(type_proto::Tensor {
                elem_type,
                shape: None,
            })),
            denotation: String::new(),
        }),
        doc_string: String::new(),
    }
}

/// Create a new NodeProto
pub fn make_node(op_type: &str, inputs: &[&str], outputs: &[&str], name: &str) -> NodeProto {
    NodeProto {
        op_type: op_type.to_string(),
        input: inputs.iter().map(|s| s.to_string()).collect(),
        output: outputs.iter().map(|s| s.to_string()).collect(),
        name: name.to_string(),
        ..Default::default()
    }
}

/// Create a Constant node carrying a literal tensor in its `value` attribute
pub fn make_constant_node(name: &str, output: &str, value: TensorProto) -> NodeProto {
    NodeProto {
        op_type: "Constant".to_string(),
        output: vec![output.to_string()],
        name: name.to_string(),
        attribute: vec![AttributeProto {
            name: "value".to_string(),
            t: Some(value),
            r#type: attribute_proto::AttributeType::Tensor as i32,
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_tensor_value_info() {
        let vi = make_tensor_value_info("test", 1, &[1, 3, 224, 224]);
        assert_eq!(vi.name, "test");
        assert_eq!(vi.get_shape(), Some(vec![1, 3, 224, 224]));
        assert_eq!(vi.get_elem_type(), Some(1));
    }

    #[test]
    fn test_make_unknown_value_info() {
        let vi = make_unknown_value_info("t", 1);
        assert_eq!(vi.get_elem_type(), Some(1));
        assert_eq!(vi.get_shape(), None);
    }

    #[test]
    fn test_make_node() {
        let node = make_node("Conv", &["X", "W"], &["Y"], "conv_0");
        assert_eq!(node.op_type, "Conv");
        assert_eq!(node.input, vec!["X", "W"]);
        assert_eq!(node.output, vec!["Y"]);
    }

    #[test]
    fn test_make_constant_node() {
        let tensor = TensorProto {
            dims: vec![1],
            data_type: 1,
            float_data: vec![2.5],
            ..Default::default()
        };
        let node = make_constant_node("const_0", "c", tensor);

        assert!(node.is_op_type("Constant"));
        let value = node.get_attribute_tensor("value").unwrap();
        assert_eq!(value.float_data, vec![2.5]);
    }
}
