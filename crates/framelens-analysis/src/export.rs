//! Export builder: serializes a finished result set to CSV bytes.

use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::AnalysisResult;

const HEADER: [&str; 8] = [
    "Video Title",
    "Sentiment",
    "Emotion",
    "Frame",
    "Ideology Score",
    "Topics",
    "Language Mix",
    "Agency Subject",
];

/// Serializes results into downloadable CSV bytes: the fixed header row plus
/// one row per result, standard CSV quoting only. An empty result set still
/// produces the header row.
///
/// # Errors
///
/// Returns [`AnalysisError::Internal`] if the in-memory writer fails, which
/// in practice it does not.
pub fn build_csv(results: &[AnalysisResult]) -> Result<Vec<u8>, AnalysisError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| AnalysisError::Internal(e.to_string()))?;

    for result in results {
        writer
            .write_record([
                result.video_title.as_str(),
                result.sentiment.as_str(),
                result.emotion.as_str(),
                result.frame.as_str(),
                &score_field(&result.ideology_score),
                result.topics.as_str(),
                result.language_mix.as_str(),
                result.agency_subject.as_str(),
            ])
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalysisError::Internal(e.to_string()))
}

/// Download filename for a finished run.
#[must_use]
pub fn export_filename(channel_name: &str, llm_model: &str) -> String {
    format!("{channel_name}_sentiment_analysis_{llm_model}.csv")
}

/// Renders the string-or-number ideology score as a CSV cell. Strings pass
/// through unquoted; numbers use their JSON form; an absent score is empty.
fn score_field(score: &Value) -> String {
    match score {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
