use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use framelens_analysis::{build_csv, export_filename, AnalysisResult};

use super::ApiError;

fn default_channel_name() -> String {
    "unknown_channel".to_string()
}

fn default_llm_model() -> String {
    "unknown_model".to_string()
}

/// The caller sends back the full result set from an earlier analyze call —
/// there is no server-side session to look it up in.
#[derive(Debug, Deserialize)]
pub(super) struct ExportRequest {
    #[serde(default)]
    results: Vec<AnalysisResult>,
    #[serde(default = "default_channel_name")]
    channel_name: String,
    #[serde(default = "default_llm_model")]
    llm_model: String,
}

pub(super) async fn download_csv(
    Json(request): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let bytes = build_csv(&request.results).map_err(|e| ApiError::internal(e.to_string()))?;
    let filename = export_filename(&request.channel_name, &request.llm_model);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
