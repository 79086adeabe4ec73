//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with typed response deserialization for the three
//! endpoints the pipeline needs: `search`, `channels`, and `playlistItems`.
//! The API key travels as a query parameter on every call, mirroring how the
//! Data API expects it.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::types::{ChannelListResponse, PlaylistItemListResponse, SearchListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the YouTube Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production Data API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::ApiError`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("framelens/0.1 (channel-title-analysis)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining a resource name appends a path segment instead of replacing
        // the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for a channel by free-text query.
    ///
    /// Calls the `search` endpoint filtered to `type=channel` with
    /// `maxResults=1` and returns the first result's channel ID, or `None`
    /// when the result set is empty.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_channel(&self, query: &str) -> Result<Option<String>, YoutubeError> {
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "channel"),
                ("maxResults", "1"),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let response: SearchListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(response.items.into_iter().next().map(|r| r.snippet.channel_id))
    }

    /// Fetches the channel's "uploads" playlist ID via the `channels`
    /// endpoint.
    ///
    /// Returns `None` when the channel lookup yields no items (unknown or
    /// deleted channel).
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn uploads_playlist_id(
        &self,
        channel_id: &str,
    ) -> Result<Option<String>, YoutubeError> {
        let url = self.build_url("channels", &[("part", "contentDetails"), ("id", channel_id)])?;
        let body = self.request_json(&url).await?;

        let response: ChannelListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("channels(id={channel_id})"),
                source: e,
            })?;

        Ok(response
            .items
            .into_iter()
            .next()
            .map(|c| c.content_details.related_playlists.uploads))
    }

    /// Fetches up to `max_results` item titles from a playlist via the
    /// `playlistItems` endpoint. Titles are returned raw; normalization is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn playlist_titles(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<String>, YoutubeError> {
        let max = max_results.to_string();
        let url = self.build_url(
            "playlistItems",
            &[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", &max),
            ],
        )?;
        let body = self.request_json(&url).await?;

        let response: PlaylistItemListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("playlistItems(playlistId={playlist_id})"),
                source: e,
            })?;

        Ok(response
            .items
            .into_iter()
            .map(|item| item.snippet.title)
            .collect())
    }

    /// Builds the full request URL for a resource with properly
    /// percent-encoded query parameters, appending the API key last.
    fn build_url(&self, resource: &str, extra: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(resource)
            .map_err(|e| YoutubeError::ApiError(format!("invalid resource '{resource}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] on network failure or a non-2xx status.
    /// Returns [`YoutubeError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
