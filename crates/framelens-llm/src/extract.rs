//! Verdict extraction from free-form model output.
//!
//! Models wrap their JSON in prose ("Sure, here you go: {...}") or code
//! fences; the extractor takes the first greedy brace-delimited span and
//! parses that, ignoring everything around it.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// The structured classification parsed out of a model response. Every field
/// is optional on the wire and defaults to empty on read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Verdict {
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub frame: String,
    /// Models answer with either a bare number or a string; both are kept
    /// as-is and serialized back untouched.
    #[serde(default = "empty_string_value")]
    pub ideology_score: Value,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language_mix: String,
    #[serde(default)]
    pub agency_subject: String,
}

fn empty_string_value() -> Value {
    Value::String(String::new())
}

fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Greedy, dot-matches-newline: first '{' through last '}', allowing
    // embedded newlines and nested objects.
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex must compile"))
}

/// Locates the first JSON-object-shaped substring in `response` and parses it
/// as a [`Verdict`].
///
/// Returns `None` when no brace-delimited span exists or the span is not
/// valid JSON of the expected shape. The parse failure reason is
/// intentionally discarded (logged at debug, then dropped): the pipeline
/// treats an unparseable verdict the same as a failed backend call.
#[must_use]
pub fn extract_verdict(response: &str) -> Option<Verdict> {
    let span = json_object_pattern().find(response)?;
    match serde_json::from_str::<Verdict>(span.as_str()) {
        Ok(verdict) => Some(verdict),
        Err(e) => {
            tracing::debug!(error = %e, "extracted span is not a parseable verdict");
            None
        }
    }
}
