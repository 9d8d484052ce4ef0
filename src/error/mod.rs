//! Error types for subnetron
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for subgraph extraction operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No selection token resolved to a node in the source model
    #[error("No nodes selected or selected nodes not found in the model")]
    SelectionEmpty,

    /// Structurally broken source model
    #[error("Malformed source model: {0}")]
    MalformedSource(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid model
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Protobuf decode error
    #[error("Protobuf decode error: {0}")]
    ProtoDecode(#[from] prost::DecodeError),

    /// Protobuf encode error
    #[error("Protobuf encode error: {0}")]
    ProtoEncode(#[from] prost::EncodeError),
}

impl ExtractError {
    /// Whether the caller can recover by retrying with different input
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractError::SelectionEmpty)
    }
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
