use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration, resolved once at startup from environment
/// variables.
///
/// `youtube_api_key` is only a fallback: every analysis request may carry its
/// own key, and the per-request value wins. `youtube_rate_limit` and
/// `llm_rate_limit` are declared but not enforced by any component; they are
/// kept so the configuration surface matches deployments that already set
/// them.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub youtube_api_key: Option<String>,
    pub max_videos_per_analysis: u32,
    pub default_videos_count: u32,
    pub youtube_rate_limit: u32,
    pub llm_rate_limit: u32,
    pub prompt_path: PathBuf,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("max_videos_per_analysis", &self.max_videos_per_analysis)
            .field("default_videos_count", &self.default_videos_count)
            .field("youtube_rate_limit", &self.youtube_rate_limit)
            .field("llm_rate_limit", &self.llm_rate_limit)
            .field("prompt_path", &self.prompt_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
