//! Analysis orchestration for framelens.
//!
//! Sequences resolver → title source (or upload adapter) → classifier over
//! every title, collects per-title verdicts into an [`AnalysisRun`], and
//! serializes finished runs to CSV for download. Requests are stateless:
//! nothing survives between the analyze call and the export call, so the
//! export endpoint receives the full result set back from the caller.

pub mod error;
pub mod export;
pub mod pipeline;
pub mod types;
pub mod upload;

pub use error::AnalysisError;
pub use export::{build_csv, export_filename};
pub use pipeline::{
    run_channel_analysis, run_upload_analysis, ChannelRequest, PipelineConfig, UploadRequest,
};
pub use types::{AnalysisResult, AnalysisRun};
pub use upload::extract_titles;
