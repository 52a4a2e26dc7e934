//! HTTP request handlers for the mock backend.
//!
//! Implements health, document analysis and document generation endpoints
//! using axum.

use crate::config::{MockConfig, ResponseMode};
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use lexdoc_client::response::{
    ErrorResponse, GenerateMetadata, GenerateRequest, GenerateResponse, HealthResponse,
    ProcessResponse,
};
use lexdoc_client::{DemoCatalog, ThreadRngSource, UPLOAD_FIELD};
use lexdoc_domain::AnalysisResult;
use lexdoc_generator::{render_tag, DISCLAIMER};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Version reported by `/health`
pub const MOCK_VERSION: &str = "demo-1.0.0";

/// Processing method attached to the fixed response
pub const MOCK_PROCESSING_METHOD: &str = "Mock Backend";

/// Generation method reported by `/generate_document`
pub const TEMPLATE_GENERATION_METHOD: &str = "Template-based";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<MockConfig>,
    /// Samples served in demo mode
    pub demo: Arc<DemoCatalog>,
}

impl AppState {
    /// Create state from a configuration
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
            demo: Arc::new(DemoCatalog::builtin()),
        }
    }
}

/// Query parameters of `/process_document`
#[derive(Debug, Deserialize)]
pub struct ProcessParams {
    /// Requested model tag
    #[serde(default)]
    pub ai_model: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// The fixed analysis returned in [`ResponseMode::Fixed`]
pub fn fixed_analysis() -> AnalysisResult {
    AnalysisResult::new(
        "This is a mock legal document summary generated for demo purposes. The document appears to be a standard service agreement with the following key elements: Terms of service, payment obligations, liability limitations, and termination clauses. Please review all sections carefully before signing.",
        [
            "Service term: 12 months with automatic renewal",
            "Payment due within 30 days of invoice date",
            "Liability limited to the amount paid in the previous 12 months",
            "Either party may terminate with 30 days written notice",
            "Confidentiality obligations survive termination",
            "Dispute resolution through binding arbitration",
            "Intellectual property rights remain with respective owners",
        ]
        .iter()
        .map(|p| p.to_string())
        .collect(),
        MOCK_PROCESSING_METHOD,
    )
}

fn failed_analysis() -> AnalysisResult {
    AnalysisResult::new(
        "Summary generation failed: model unavailable",
        vec!["Key point extraction failed".to_string()],
        MOCK_PROCESSING_METHOD,
    )
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Mock backend server is running".to_string(),
        llm_available: false,
        version: MOCK_VERSION.to_string(),
    })
}

/// POST /process_document - Analyze an uploaded image
///
/// Requires a non-empty multipart part named `file`. The image itself is
/// never inspected.
async fn process_document(
    State(state): State<AppState>,
    Query(params): Query<ProcessParams>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    // 1. Find the upload
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
        upload = Some((file_name, bytes.len()));
    }

    let (file_name, size) = upload
        .filter(|(_, size)| *size > 0)
        .ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    info!(
        "Processing {} ({} bytes), model {}",
        file_name,
        size,
        params.ai_model.as_deref().unwrap_or("<none>")
    );

    // 2. Simulate processing time
    tokio::time::sleep(state.config.response_delay()).await;

    // 3. Answer according to mode
    let result = match state.config.mode {
        ResponseMode::Fixed => fixed_analysis(),
        ResponseMode::Demo => state.demo.pick(&mut ThreadRngSource),
        ResponseMode::Failing => failed_analysis(),
    };
    debug!("Returning {} key points", result.key_points.len());

    Ok(Json(ProcessResponse::from(result)))
}

/// POST /generate_document - Render a document from form values
async fn generate_document(Json(request): Json<GenerateRequest>) -> Json<GenerateResponse> {
    let document = render_tag(&request.document_type, &request.form_data);
    info!(
        "Generated {} document ({} chars)",
        document.document_type(),
        document.text().len()
    );

    Json(GenerateResponse {
        document_type: document.document_type().as_str().to_string(),
        generated_document: document.into_text(),
        metadata: Some(GenerateMetadata {
            generation_method: Some(TEMPLATE_GENERATION_METHOD.to_string()),
            template_used: Some(request.document_type),
            disclaimer: Some(DISCLAIMER.to_string()),
        }),
    })
}

/// Fallback for unknown routes
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Endpoint not found".to_string(),
        }),
    )
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health_check))
        .route("/process_document", post(process_document))
        .route("/generate_document", post(generate_document))
        .fallback(not_found)
        .with_state(state)
}
