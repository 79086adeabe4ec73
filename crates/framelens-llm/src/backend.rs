/// The closed set of supported LLM backends, selected per request by its
/// wire discriminator (`"chatgpt"` / `"gemini"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    ChatGpt,
    Gemini,
}

impl LlmBackend {
    /// Parses the wire discriminator. Anything outside the closed set is
    /// `None`; the caller turns that into a validation error before any
    /// client is constructed.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "chatgpt" => Some(LlmBackend::ChatGpt),
            "gemini" => Some(LlmBackend::Gemini),
            _ => None,
        }
    }

    /// The model label reported back to the caller and used in export
    /// filenames: the Gemini model variant for Gemini, the backend name for
    /// ChatGPT.
    #[must_use]
    pub fn model_label(self, gemini_model: &str) -> String {
        match self {
            LlmBackend::ChatGpt => "chatgpt".to_string(),
            LlmBackend::Gemini => gemini_model.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_both_backends() {
        assert_eq!(LlmBackend::parse("chatgpt"), Some(LlmBackend::ChatGpt));
        assert_eq!(LlmBackend::parse("gemini"), Some(LlmBackend::Gemini));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(LlmBackend::parse("unsupported"), None);
        assert_eq!(LlmBackend::parse("ChatGPT"), None);
        assert_eq!(LlmBackend::parse(""), None);
    }

    #[test]
    fn model_label_uses_variant_only_for_gemini() {
        assert_eq!(
            LlmBackend::Gemini.model_label("gemini-2.5-flash"),
            "gemini-2.5-flash"
        );
        assert_eq!(LlmBackend::ChatGpt.model_label("gemini-2.5-flash"), "chatgpt");
    }
}
