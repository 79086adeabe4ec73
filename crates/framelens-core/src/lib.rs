//! Shared building blocks for framelens.
//!
//! Configuration loading, title normalization, and display-slug derivation.
//! Everything here is pure and network-free; the API clients live in
//! `framelens-youtube` and `framelens-llm`.

mod app_config;
mod config;
pub mod normalize;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use normalize::{display_slug, normalize_title};
