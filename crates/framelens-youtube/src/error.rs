use thiserror::Error;

/// Errors returned by the YouTube Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status from the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client construction or URL building failed.
    #[error("YouTube API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
