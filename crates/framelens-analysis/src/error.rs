use thiserror::Error;

/// Errors that abort an analysis run. Messages are user-facing and returned
/// verbatim in the `{"error": ...}` response body.
///
/// Per-title classification failures are deliberately NOT represented here:
/// they shrink the result set and never abort the run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A request field was missing or out of range. Caught before any
    /// external collaborator is contacted.
    #[error("{0}")]
    Validation(String),

    /// The resolver yielded NotFound. Missing channel, unsupported URL
    /// shape, bad key, and network failure all collapse into this one arm.
    #[error("Could not find channel. Please check the channel name or URL and YouTube API key.")]
    ChannelNotFound,

    /// The title source came back empty. Covers an empty channel, a bad key,
    /// and network failure alike.
    #[error("Could not retrieve video titles. Please check the channel and YouTube API key.")]
    TitlesUnavailable,

    /// Multipart submission carried no `csv_file` part.
    #[error("No CSV file uploaded.")]
    NoFileUploaded,

    /// The `csv_file` part had an empty filename.
    #[error("No CSV file selected.")]
    NoFileSelected,

    /// The uploaded file could not be parsed as CSV.
    #[error("Error reading CSV file: {0}")]
    CsvRead(String),

    /// No column name contains "title" or "video".
    #[error("No video title column found. Please ensure your CSV has a column named \"video_title\" or \"title\".")]
    NoTitleColumn,

    /// Every cell in the title column was empty or whitespace.
    #[error("No video titles found in the CSV file.")]
    NoTitles,

    /// Anything unexpected (client construction, I/O). Surfaces as a server
    /// error rather than a 400.
    #[error("{0}")]
    Internal(String),
}

impl AnalysisError {
    /// Whether the failure is the caller's to fix (HTTP 400) rather than an
    /// unexpected server-side condition (HTTP 500).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalysisError::Internal(_))
    }
}
