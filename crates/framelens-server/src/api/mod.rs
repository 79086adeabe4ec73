mod analyze;
mod export;
mod upload;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use framelens_analysis::{AnalysisError, AnalysisResult, AnalysisRun, PipelineConfig};
use framelens_core::AppConfig;

use crate::middleware::request_id;

/// Request-scoped shared state: pipeline settings plus the HTTP-surface
/// defaults. No mutable state lives here — every analysis run is stateless.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: PipelineConfig,
    pub default_videos_count: u32,
}

impl AppState {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            pipeline: PipelineConfig::from_app_config(config),
            default_videos_count: config.default_videos_count,
        }
    }
}

/// JSON error body, mirrored by every endpoint: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: format!("An error occurred: {}", message.into()),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        if error.is_client_error() {
            Self::bad_request(error.to_string())
        } else {
            tracing::error!(error = %error, "analysis run failed unexpectedly");
            Self::internal(error.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// Success body for both analysis endpoints.
#[derive(Debug, Serialize)]
pub(super) struct AnalyzeResponse {
    pub success: bool,
    pub results: Vec<AnalysisResult>,
    pub total_analyzed: usize,
    pub channel_name: String,
    pub llm_model: String,
}

impl From<AnalysisRun> for AnalyzeResponse {
    fn from(run: AnalysisRun) -> Self {
        Self {
            success: true,
            results: run.results,
            total_analyzed: run.total_analyzed,
            channel_name: run.channel_name,
            llm_model: run.llm_model,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/analyze", post(analyze::analyze))
        .route("/analyze_csv", post(upload::analyze_csv))
        .route("/download_csv", post(export::download_csv))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
