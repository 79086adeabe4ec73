use axum::{extract::State, Json};
use serde::Deserialize;

use framelens_analysis::{run_channel_analysis, ChannelRequest};

use super::{AnalyzeResponse, ApiError, AppState};

fn default_input_method() -> String {
    "channel".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default = "default_input_method")]
    input_method: String,
    #[serde(default)]
    channel_input: String,
    /// Wide signed type: a negative count must reach the range validation
    /// and come back as the usual 400, not as a deserialization rejection.
    #[serde(default)]
    num_videos: Option<i64>,
    #[serde(default)]
    llm_type: String,
    #[serde(default = "default_gemini_model")]
    gemini_model: String,
    #[serde(default)]
    youtube_api_key: String,
    #[serde(default)]
    llm_api_key: String,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if request.input_method != "channel" {
        return Err(ApiError::bad_request(
            "Invalid input method. Use /analyze_csv for CSV uploads.",
        ));
    }

    // Out-of-range values (negative or past u32) clamp to 0, which the
    // pipeline's "between 1 and N" validation rejects with its own message.
    let num_videos = match request.num_videos {
        None => state.default_videos_count,
        Some(n) => u32::try_from(n).unwrap_or(0),
    };

    let channel_request = ChannelRequest {
        channel_input: request.channel_input,
        num_videos,
        llm_type: request.llm_type,
        gemini_model: request.gemini_model,
        youtube_api_key: request.youtube_api_key,
        llm_api_key: request.llm_api_key,
    };

    let run = run_channel_analysis(&state.pipeline, &channel_request).await?;
    Ok(Json(AnalyzeResponse::from(run)))
}
