//! Pipeline orchestration: resolver → title source (or upload adapter) →
//! classifier, per request.
//!
//! Validation runs first and in a fixed order — the first failure wins and
//! nothing touches the network before validation passes. After that, run
//! failures can only come from resolution or title retrieval; individual
//! classification failures shrink the result set and never abort the run.

use std::path::PathBuf;

use framelens_core::{display_slug, AppConfig};
use framelens_llm::{
    load_prompt_template, Classifier, GeminiClient, LlmBackend, LlmClient, OpenAiClient,
};
use framelens_youtube::{list_recent_titles, resolve_channel, Resolution, YoutubeClient};

use crate::error::AnalysisError;
use crate::types::{AnalysisResult, AnalysisRun};
use crate::upload::extract_titles;

/// Pipeline settings derived from [`AppConfig`] at startup. The base-URL
/// overrides exist so tests can point every outbound client at a wiremock
/// server; production leaves them `None`.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_videos: u32,
    pub request_timeout_secs: u64,
    pub prompt_path: PathBuf,
    /// Fallback YouTube key applied when a request omits its own.
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: Option<String>,
    pub openai_base_url: Option<String>,
    pub gemini_base_url: Option<String>,
}

impl PipelineConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            max_videos: config.max_videos_per_analysis,
            request_timeout_secs: config.request_timeout_secs,
            prompt_path: config.prompt_path.clone(),
            youtube_api_key: config.youtube_api_key.clone(),
            youtube_base_url: None,
            openai_base_url: None,
            gemini_base_url: None,
        }
    }
}

/// Channel-mode analysis request, after HTTP-shape defaults are applied.
#[derive(Debug, Clone)]
pub struct ChannelRequest {
    pub channel_input: String,
    pub num_videos: u32,
    pub llm_type: String,
    pub gemini_model: String,
    pub youtube_api_key: String,
    pub llm_api_key: String,
}

/// Upload-mode analysis request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub llm_type: String,
    pub gemini_model: String,
    pub llm_api_key: String,
}

/// Runs channel-mode analysis end to end.
///
/// # Errors
///
/// - [`AnalysisError::Validation`] for missing/out-of-range fields, before
///   any network call.
/// - [`AnalysisError::ChannelNotFound`] when resolution fails.
/// - [`AnalysisError::TitlesUnavailable`] when no titles come back.
/// - [`AnalysisError::Internal`] if a client cannot be constructed.
pub async fn run_channel_analysis(
    config: &PipelineConfig,
    request: &ChannelRequest,
) -> Result<AnalysisRun, AnalysisError> {
    if request.channel_input.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "Channel input is required.".to_string(),
        ));
    }

    let youtube_key = effective_youtube_key(config, &request.youtube_api_key)
        .ok_or_else(|| AnalysisError::Validation("YouTube API key is required.".to_string()))?;

    if request.llm_api_key.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "LLM API key is required.".to_string(),
        ));
    }

    if request.num_videos < 1 || request.num_videos > config.max_videos {
        return Err(AnalysisError::Validation(format!(
            "Number of videos must be between 1 and {}.",
            config.max_videos
        )));
    }

    let backend = parse_backend(&request.llm_type)?;

    let youtube = build_youtube_client(config, &youtube_key)?;

    let channel_id = match resolve_channel(&youtube, &request.channel_input).await {
        Resolution::Found(id) => id,
        Resolution::NotFound => {
            tracing::warn!(
                channel_input = %request.channel_input,
                "channel resolution failed, aborting run"
            );
            return Err(AnalysisError::ChannelNotFound);
        }
    };

    let titles = list_recent_titles(&youtube, &channel_id, request.num_videos).await;
    if titles.is_empty() {
        tracing::warn!(channel_id, "no titles retrieved, aborting run");
        return Err(AnalysisError::TitlesUnavailable);
    }

    let classifier = build_classifier(config, backend, request)?;
    let results = classify_titles(&classifier, titles).await;

    Ok(AnalysisRun {
        total_analyzed: results.len(),
        channel_name: display_slug(&request.channel_input),
        llm_model: backend.model_label(&request.gemini_model),
        results,
    })
}

/// Runs upload-mode analysis end to end.
///
/// The handler has already checked the multipart shape (file present,
/// filename non-empty); this validates the remaining fields, extracts titles
/// from the CSV, and runs the same classification loop as channel mode.
///
/// # Errors
///
/// - [`AnalysisError::Validation`] for missing key / unknown backend.
/// - [`AnalysisError::CsvRead`] / [`AnalysisError::NoTitleColumn`] /
///   [`AnalysisError::NoTitles`] for unusable uploads.
/// - [`AnalysisError::Internal`] if a client cannot be constructed.
pub async fn run_upload_analysis(
    config: &PipelineConfig,
    request: &UploadRequest,
) -> Result<AnalysisRun, AnalysisError> {
    if request.llm_api_key.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "AI Model API key is required.".to_string(),
        ));
    }

    let backend = parse_backend(&request.llm_type)?;

    let titles = extract_titles(&request.file_bytes)?;
    if titles.is_empty() {
        return Err(AnalysisError::NoTitles);
    }

    let channel_name = request
        .file_name
        .strip_suffix(".csv")
        .unwrap_or(&request.file_name)
        .to_string();

    let classifier = build_classifier_from_parts(
        config,
        backend,
        &request.llm_api_key,
        &request.gemini_model,
    )?;
    let results = classify_titles(&classifier, titles).await;

    Ok(AnalysisRun {
        total_analyzed: results.len(),
        channel_name,
        llm_model: backend.model_label(&request.gemini_model),
        results,
    })
}

/// Classifies every title sequentially, keeping only parsed verdicts.
/// Dropped titles are visible only as a smaller `total_analyzed`.
async fn classify_titles(classifier: &Classifier, titles: Vec<String>) -> Vec<AnalysisResult> {
    let total = titles.len();
    let mut results = Vec::with_capacity(total);
    for title in titles {
        if let Some(verdict) = classifier.classify(&title).await {
            results.push(AnalysisResult::from_verdict(title, verdict));
        } else {
            tracing::debug!(title, "skipping title without a verdict");
        }
    }
    tracing::info!(
        analyzed = results.len(),
        skipped = total - results.len(),
        "classification pass complete"
    );
    results
}

fn parse_backend(llm_type: &str) -> Result<LlmBackend, AnalysisError> {
    LlmBackend::parse(llm_type).ok_or_else(|| {
        AnalysisError::Validation("Invalid LLM type. Choose from: chatgpt, gemini".to_string())
    })
}

/// Request key wins; the configured fallback covers requests that omit it.
/// A blank effective key counts as absent.
fn effective_youtube_key(config: &PipelineConfig, request_key: &str) -> Option<String> {
    let trimmed = request_key.trim();
    if !trimmed.is_empty() {
        return Some(trimmed.to_string());
    }
    config
        .youtube_api_key
        .as_ref()
        .filter(|k| !k.trim().is_empty())
        .cloned()
}

fn build_youtube_client(
    config: &PipelineConfig,
    api_key: &str,
) -> Result<YoutubeClient, AnalysisError> {
    let client = match &config.youtube_base_url {
        Some(base) => YoutubeClient::with_base_url(api_key, config.request_timeout_secs, base),
        None => YoutubeClient::new(api_key, config.request_timeout_secs),
    };
    client.map_err(|e| AnalysisError::Internal(e.to_string()))
}

fn build_classifier(
    config: &PipelineConfig,
    backend: LlmBackend,
    request: &ChannelRequest,
) -> Result<Classifier, AnalysisError> {
    build_classifier_from_parts(config, backend, &request.llm_api_key, &request.gemini_model)
}

fn build_classifier_from_parts(
    config: &PipelineConfig,
    backend: LlmBackend,
    llm_api_key: &str,
    gemini_model: &str,
) -> Result<Classifier, AnalysisError> {
    let timeout = config.request_timeout_secs;
    let client = match backend {
        LlmBackend::ChatGpt => {
            let client = match &config.openai_base_url {
                Some(base) => OpenAiClient::with_base_url(llm_api_key, timeout, base),
                None => OpenAiClient::new(llm_api_key, timeout),
            }
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;
            LlmClient::ChatGpt(client)
        }
        LlmBackend::Gemini => {
            let client = match &config.gemini_base_url {
                Some(base) => {
                    GeminiClient::with_base_url(llm_api_key, gemini_model, timeout, base)
                }
                None => GeminiClient::new(llm_api_key, gemini_model, timeout),
            }
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;
            LlmClient::Gemini(client)
        }
    };

    let template = load_prompt_template(&config.prompt_path);
    Ok(Classifier::new(client, template))
}
