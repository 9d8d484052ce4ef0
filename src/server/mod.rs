//! HTTP transport for subgraph extraction
//!
//! One POST endpoint accepts the viewer's node selection and responds with
//! the extracted model as a downloadable file. The serialized buffer is
//! streamed straight from memory; no shared temp path exists, so concurrent
//! requests cannot clobber each other's artifacts.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::error::ExtractResult;
use crate::extract::extract_to_bytes;
use crate::io::load_model;

/// Default port, matching what the viewer-side script expects
pub const DEFAULT_PORT: u16 = 5000;

/// Shared server state
///
/// Only the model path is shared; the model itself is loaded fresh per
/// request so every extraction call is self-contained.
#[derive(Debug)]
pub struct ServerState {
    /// Path of the source model being served
    pub model_path: PathBuf,
}

impl ServerState {
    /// Create state for serving one model file
    pub fn new(model_path: PathBuf) -> Self {
        Self { model_path }
    }
}

/// Request body for the extraction endpoint
///
/// Tokens may be null; the resolver discards them.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Raw selection tokens as sent by the viewer UI
    #[serde(rename = "selectedNodes", default)]
    pub selected_nodes: Vec<Option<String>>,
}

/// JSON body returned on extraction failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable failure description
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/validate_extract", post(validate_extract))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: Arc<ServerState>, host: &str, port: u16) -> ExtractResult<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Extract a subgraph from the served model
///
/// Returns the serialized model as an attachment, or a JSON error body.
/// Recoverable failures (nothing selected) map to 400, everything else
/// to 500.
pub async fn validate_extract(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ExtractRequest>,
) -> Response {
    match run_extraction(&state, &request.selected_nodes) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/octet-stream"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"extracted_subgraph.onnx\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            let status = if err.is_recoverable() {
                warn!("extraction rejected: {}", err);
                StatusCode::BAD_REQUEST
            } else {
                error!("extraction failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(ErrorResponse {
                    success: false,
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn run_extraction(state: &ServerState, selection: &[Option<String>]) -> ExtractResult<Vec<u8>> {
    let model = load_model(&state.model_path)?;
    extract_to_bytes(&model, selection)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save_model;
    use crate::proto::extensions::{make_node, make_tensor_value_info};
    use crate::proto::{GraphProto, ModelProto};

    fn serve_test_model(name: &str) -> Arc<ServerState> {
        let model = ModelProto {
            ir_version: 8,
            graph: Some(GraphProto {
                node: vec![make_node("Relu", &["X"], &["Y"], "relu_0")],
                input: vec![make_tensor_value_info("X", 1, &[1])],
                output: vec![make_tensor_value_info("Y", 1, &[1])],
                ..Default::default()
            }),
            ..Default::default()
        };
        let path = std::env::temp_dir().join(name);
        save_model(&model, &path).unwrap();
        Arc::new(ServerState::new(path))
    }

    #[test]
    fn test_router_creation() {
        let state = serve_test_model("subnetron_router_test.onnx");
        let _router = create_router(Arc::clone(&state));
        std::fs::remove_file(&state.model_path).ok();
    }

    #[tokio::test]
    async fn test_validate_extract_success() {
        let state = serve_test_model("subnetron_extract_ok.onnx");
        let request = ExtractRequest {
            selected_nodes: vec![Some("node-name-relu_0".to_string())],
        };

        let response = validate_extract(State(Arc::clone(&state)), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        // body must decode back into a structurally valid model
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let model = crate::io::load_model_from_bytes(&body).unwrap();
        assert!(crate::io::validate_model(&model).is_valid);

        std::fs::remove_file(&state.model_path).ok();
    }

    #[tokio::test]
    async fn test_validate_extract_empty_selection() {
        let state = serve_test_model("subnetron_extract_empty.onnx");
        let request = ExtractRequest {
            selected_nodes: vec![None, Some("ghost".to_string())],
        };

        let response = validate_extract(State(Arc::clone(&state)), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], serde_json::Value::Bool(false));
        assert!(json["error"].as_str().unwrap().contains("No nodes selected"));

        std::fs::remove_file(&state.model_path).ok();
    }

    #[tokio::test]
    async fn test_validate_extract_unreadable_model() {
        let state = Arc::new(ServerState::new(PathBuf::from("/nonexistent/model.onnx")));
        let request = ExtractRequest {
            selected_nodes: vec![Some("relu_0".to_string())],
        };

        let response = validate_extract(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
