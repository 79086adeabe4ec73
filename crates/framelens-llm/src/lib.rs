//! LLM-backed title classification for framelens.
//!
//! One prompt template, two completion backends (OpenAI chat completions and
//! Gemini `generateContent`) behind a closed [`LlmClient`] enum, and a JSON
//! verdict extractor that digs a brace-delimited object out of free-form
//! model output. A title that cannot be classified yields `None`, never an
//! error — the pipeline drops it and moves on.

pub mod backend;
pub mod classifier;
pub mod error;
pub mod extract;
pub mod prompt;

mod gemini;
mod openai;

pub use backend::LlmBackend;
pub use classifier::{Classifier, LlmClient};
pub use error::LlmError;
pub use extract::{extract_verdict, Verdict};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use prompt::{load_prompt_template, render_prompt};
