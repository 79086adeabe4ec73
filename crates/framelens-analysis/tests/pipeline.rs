//! End-to-end pipeline tests with wiremock standing in for the YouTube Data
//! API and the LLM backends.

use std::path::PathBuf;

use framelens_analysis::{
    run_channel_analysis, run_upload_analysis, AnalysisError, ChannelRequest, PipelineConfig,
    UploadRequest,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(youtube: &MockServer, llm: &MockServer) -> PipelineConfig {
    PipelineConfig {
        max_videos: 50,
        request_timeout_secs: 30,
        prompt_path: PathBuf::from("/nonexistent/prompt.txt"),
        youtube_api_key: None,
        youtube_base_url: Some(youtube.uri()),
        openai_base_url: Some(llm.uri()),
        gemini_base_url: Some(llm.uri()),
    }
}

async fn mount_channel_with_titles(server: &MockServer, titles: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("id", "UC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                { "contentDetails": { "relatedPlaylists": { "uploads": "UU123" } } }
            ]
        })))
        .mount(server)
        .await;

    let items: Vec<serde_json::Value> = titles
        .iter()
        .map(|t| serde_json::json!({ "snippet": { "title": t } }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "UU123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": items })),
        )
        .mount(server)
        .await;
}

fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn channel_analysis_classifies_each_title() {
    let youtube = MockServer::start().await;
    let llm = MockServer::start().await;

    mount_channel_with_titles(&youtube, &["First video", "Second video"]).await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "{\"sentiment\": \"positive\", \"topics\": [\"news\"]}",
        )))
        .mount(&llm)
        .await;

    let request = ChannelRequest {
        channel_input: "youtube.com/channel/UC123".to_string(),
        num_videos: 5,
        llm_type: "gemini".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        youtube_api_key: "yt-key".to_string(),
        llm_api_key: "g-key".to_string(),
    };

    let run = run_channel_analysis(&config_for(&youtube, &llm), &request)
        .await
        .expect("run should succeed");

    assert_eq!(run.total_analyzed, 2);
    assert_eq!(run.results.len(), 2);
    assert_eq!(run.results[0].video_title, "First video");
    assert_eq!(run.results[0].sentiment, "positive");
    assert_eq!(run.results[0].topics, "news");
    assert_eq!(run.channel_name, "youtube.com_channel_UC123");
    assert_eq!(run.llm_model, "gemini-2.5-flash");
}

#[tokio::test]
async fn classification_gap_shrinks_result_set_without_failing_run() {
    let youtube = MockServer::start().await;
    let llm = MockServer::start().await;

    mount_channel_with_titles(&youtube, &["Parseable title", "Refused title"]).await;

    // The second title gets a verdict-free reply; it should be dropped.
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_string_contains("Refused title"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply("I cannot help with that.")),
        )
        .with_priority(1)
        .mount(&llm)
        .await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "{\"sentiment\": \"neutral\"}",
        )))
        .mount(&llm)
        .await;

    let request = ChannelRequest {
        channel_input: "youtube.com/channel/UC123".to_string(),
        num_videos: 5,
        llm_type: "gemini".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        youtube_api_key: "yt-key".to_string(),
        llm_api_key: "g-key".to_string(),
    };

    let run = run_channel_analysis(&config_for(&youtube, &llm), &request)
        .await
        .expect("run should succeed");

    assert_eq!(run.total_analyzed, 1);
    assert_eq!(run.results[0].video_title, "Parseable title");
}

#[tokio::test]
async fn channel_search_resolution_feeds_title_fetch() {
    let youtube = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Some Channel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [ { "snippet": { "channelId": "UC123" } } ]
        })))
        .mount(&youtube)
        .await;
    mount_channel_with_titles(&youtube, &["Only video"]).await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "{\"sentiment\": \"positive\"}",
        )))
        .mount(&llm)
        .await;

    let request = ChannelRequest {
        channel_input: "Some Channel".to_string(),
        num_videos: 3,
        llm_type: "gemini".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        youtube_api_key: "yt-key".to_string(),
        llm_api_key: "g-key".to_string(),
    };

    let run = run_channel_analysis(&config_for(&youtube, &llm), &request)
        .await
        .expect("run should succeed");
    assert_eq!(run.total_analyzed, 1);
    assert_eq!(run.channel_name, "Some_Channel");
}

#[tokio::test]
async fn empty_search_results_abort_with_channel_not_found() {
    let youtube = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&youtube)
        .await;

    let request = ChannelRequest {
        channel_input: "No Such Channel".to_string(),
        num_videos: 3,
        llm_type: "gemini".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        youtube_api_key: "yt-key".to_string(),
        llm_api_key: "g-key".to_string(),
    };

    let result = run_channel_analysis(&config_for(&youtube, &llm), &request).await;
    assert!(matches!(result, Err(AnalysisError::ChannelNotFound)));
}

#[tokio::test]
async fn upload_analysis_strips_extension_and_classifies_rows() {
    let youtube = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                { "message": { "content": "{\"sentiment\": \"negative\", \"topics\": [\"sports\", \"drama\"]}" } }
            ]
        })))
        .mount(&llm)
        .await;

    let request = UploadRequest {
        file_name: "my_titles.csv".to_string(),
        file_bytes: b"Title\n\"Hello\nWorld\"\n\n\"  Second Title  \"\n".to_vec(),
        llm_type: "chatgpt".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        llm_api_key: "sk-key".to_string(),
    };

    let run = run_upload_analysis(&config_for(&youtube, &llm), &request)
        .await
        .expect("run should succeed");

    assert_eq!(run.channel_name, "my_titles");
    assert_eq!(run.llm_model, "chatgpt");
    assert_eq!(run.total_analyzed, 2);
    assert_eq!(run.results[0].video_title, "Hello World");
    assert_eq!(run.results[1].video_title, "Second Title");
    assert_eq!(run.results[0].topics, "sports, drama");
}
