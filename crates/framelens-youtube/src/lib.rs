//! YouTube Data API v3 client for framelens.
//!
//! Resolves heterogeneous channel references (canonical URL, handle, plain
//! name) to channel IDs and fetches a channel's most recent upload titles.
//! The resolver and title source deliberately collapse every underlying
//! failure into a `NotFound`/empty sentinel — the HTTP surface reports those
//! generically, not per-cause.

pub mod client;
pub mod error;
pub mod resolver;
pub mod titles;

mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use resolver::{resolve_channel, ChannelRef, Resolution};
pub use titles::list_recent_titles;
