use serde::{Deserialize, Serialize};
use serde_json::Value;

use framelens_llm::Verdict;

/// One classified title. Immutable once built; `topics` is already joined
/// into its display form so the record round-trips through the export
/// endpoint without re-interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub video_title: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub frame: String,
    /// String or number, exactly as the model answered.
    #[serde(default)]
    pub ideology_score: Value,
    /// Topic list joined with `", "`.
    #[serde(default)]
    pub topics: String,
    #[serde(default)]
    pub language_mix: String,
    #[serde(default)]
    pub agency_subject: String,
}

impl AnalysisResult {
    /// Flattens a classifier [`Verdict`] into the per-title record.
    #[must_use]
    pub fn from_verdict(video_title: String, verdict: Verdict) -> Self {
        Self {
            video_title,
            sentiment: verdict.sentiment,
            emotion: verdict.emotion,
            frame: verdict.frame,
            ideology_score: verdict.ideology_score,
            topics: verdict.topics.join(", "),
            language_mix: verdict.language_mix,
            agency_subject: verdict.agency_subject,
        }
    }
}

/// The ephemeral aggregate of one orchestrator invocation. Returned to the
/// caller and never stored: the export endpoint expects the caller to send
/// the whole thing back.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRun {
    pub results: Vec<AnalysisResult>,
    pub total_analyzed: usize,
    pub channel_name: String,
    pub llm_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict_with_topics(topics: Vec<&str>) -> Verdict {
        let json = serde_json::json!({
            "sentiment": "positive",
            "topics": topics,
        });
        serde_json::from_value(json).expect("verdict")
    }

    #[test]
    fn from_verdict_joins_topics() {
        let result = AnalysisResult::from_verdict(
            "Title".to_string(),
            verdict_with_topics(vec!["news", "politics"]),
        );
        assert_eq!(result.topics, "news, politics");
    }

    #[test]
    fn from_verdict_single_topic_has_no_separator() {
        let result =
            AnalysisResult::from_verdict("Title".to_string(), verdict_with_topics(vec!["news"]));
        assert_eq!(result.topics, "news");
    }

    #[test]
    fn analysis_result_round_trips_through_json() {
        let result = AnalysisResult::from_verdict(
            "Title".to_string(),
            verdict_with_topics(vec!["news"]),
        );
        let json = serde_json::to_string(&result).expect("serialize");
        let back: AnalysisResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.video_title, "Title");
        assert_eq!(back.sentiment, "positive");
        assert_eq!(back.topics, "news");
    }

    #[test]
    fn analysis_result_deserialize_defaults_missing_fields() {
        let back: AnalysisResult =
            serde_json::from_str("{\"video_title\": \"T\"}").expect("deserialize");
        assert_eq!(back.video_title, "T");
        assert_eq!(back.sentiment, "");
        assert!(back.ideology_score.is_null());
    }
}
