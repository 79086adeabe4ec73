//! Per-title classification: template + backend client.

use crate::error::LlmError;
use crate::extract::{extract_verdict, Verdict};
use crate::gemini::GeminiClient;
use crate::openai::OpenAiClient;
use crate::prompt::render_prompt;

/// The two completion backends behind one contract. A closed enum rather
/// than a trait object: the set is fixed and selected by an explicit
/// discriminator ([`crate::LlmBackend`]).
pub enum LlmClient {
    ChatGpt(OpenAiClient),
    Gemini(GeminiClient),
}

impl LlmClient {
    /// Submits a single-turn completion to whichever backend this is.
    ///
    /// # Errors
    ///
    /// Propagates the backend client's [`LlmError`].
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            LlmClient::ChatGpt(client) => client.complete(prompt).await,
            LlmClient::Gemini(client) => client.complete(prompt).await,
        }
    }
}

/// A classifier bound to one backend client and one prompt template for the
/// duration of a request.
pub struct Classifier {
    client: LlmClient,
    template: String,
}

impl Classifier {
    #[must_use]
    pub fn new(client: LlmClient, template: String) -> Self {
        Self { client, template }
    }

    /// Classifies one title.
    ///
    /// Renders the template, runs the completion, and extracts the JSON
    /// verdict. Any failure — network, API, missing or malformed JSON —
    /// yields `None`: the title is skipped, the run continues. The failure
    /// reason is intentionally discarded here (logged, then dropped).
    pub async fn classify(&self, title: &str) -> Option<Verdict> {
        let prompt = render_prompt(&self.template, title);

        let response = match self.client.complete(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(title, error = %e, "classification call failed");
                return None;
            }
        };

        let verdict = extract_verdict(&response);
        if verdict.is_none() {
            tracing::warn!(title, "no parseable verdict in model response");
        }
        verdict
    }
}
