use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("FRAMELENS_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("FRAMELENS_LOG_LEVEL", "info");

    // Fallback key only: requests may carry their own, and an empty value is
    // treated as absent so validation still rejects keyless channel requests.
    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .filter(|s| !s.trim().is_empty());

    let max_videos_per_analysis = parse_u32("MAX_VIDEOS_PER_ANALYSIS", "50")?;
    let default_videos_count = parse_u32("DEFAULT_VIDEOS_COUNT", "10")?;

    // Declared for interface parity with existing deployments; no component
    // reads these at runtime.
    let youtube_rate_limit = parse_u32("YOUTUBE_RATE_LIMIT", "100")?;
    let llm_rate_limit = parse_u32("LLM_RATE_LIMIT", "60")?;

    let prompt_path = PathBuf::from(or_default("FRAMELENS_PROMPT_PATH", "prompt.txt"));
    let request_timeout_secs = parse_u64("FRAMELENS_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        youtube_api_key,
        max_videos_per_analysis,
        default_videos_count,
        youtube_rate_limit,
        llm_rate_limit,
        prompt_path,
        request_timeout_secs,
    })
}
