use thiserror::Error;

/// Errors returned by the LLM completion clients.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status from the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client construction failed, or the API returned a well-formed but
    /// unusable response (no candidates/choices).
    #[error("LLM API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
