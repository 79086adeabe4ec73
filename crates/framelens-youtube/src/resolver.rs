//! Channel reference resolution.
//!
//! Turns whatever the user typed — canonical channel URL, `@handle` URL,
//! custom URL, or a plain channel name — into a channel ID, using the search
//! endpoint only when the ID is not already embedded in the input.

use crate::client::YoutubeClient;

const CANONICAL_MARKER: &str = "youtube.com/channel/";
const CUSTOM_MARKERS: [&str; 2] = ["youtube.com/c/", "youtube.com/user/"];
const HANDLE_MARKER: &str = "youtube.com/@";

/// Parsed shape of a raw channel reference. Dispatch is purely lexical; no
/// network access happens until [`resolve_channel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelRef {
    /// Canonical URL with the channel ID embedded in the path.
    Canonical(String),
    /// Custom (`/c/`) or legacy user (`/user/`) URL. Resolving these requires
    /// an API surface we do not call; always treated as unresolvable.
    Unsupported,
    /// `@handle` URL; the handle is searched as a channel query.
    Handle(String),
    /// Anything else: treated as a free-text channel name.
    Name(String),
}

impl ChannelRef {
    /// Classifies a raw reference. Markers are checked in order: canonical
    /// URL, custom/user URL, handle URL, then plain name.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if let Some((_, rest)) = input.split_once(CANONICAL_MARKER) {
            let id = rest.split('/').next().unwrap_or_default();
            return ChannelRef::Canonical(id.to_string());
        }
        if CUSTOM_MARKERS.iter().any(|m| input.contains(m)) {
            return ChannelRef::Unsupported;
        }
        if let Some((_, rest)) = input.split_once(HANDLE_MARKER) {
            let handle = rest.split('/').next().unwrap_or_default();
            return ChannelRef::Handle(handle.to_string());
        }
        ChannelRef::Name(input.to_string())
    }
}

/// Outcome of channel resolution. The failure arm carries no reason: a
/// missing channel, an invalid API key, and a network outage all surface as
/// [`Resolution::NotFound`] and are reported generically upstream. The reason
/// is intentionally discarded here (it is logged before being dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound,
}

/// Resolves a raw channel reference to a channel ID.
///
/// Canonical URLs resolve without any network call. Custom/user URLs are a
/// known unsupported shape and resolve to [`Resolution::NotFound`]. Handles
/// and plain names go through one channel search; an empty result set or any
/// API error also yields [`Resolution::NotFound`].
pub async fn resolve_channel(client: &YoutubeClient, reference: &str) -> Resolution {
    match ChannelRef::parse(reference) {
        ChannelRef::Canonical(id) => {
            if id.is_empty() {
                Resolution::NotFound
            } else {
                Resolution::Found(id)
            }
        }
        ChannelRef::Unsupported => {
            tracing::debug!(reference, "custom/user URL resolution is not supported");
            Resolution::NotFound
        }
        ChannelRef::Handle(handle) => search_by_query(client, &handle).await,
        ChannelRef::Name(name) => search_by_query(client, &name).await,
    }
}

async fn search_by_query(client: &YoutubeClient, query: &str) -> Resolution {
    match client.search_channel(query).await {
        Ok(Some(channel_id)) => Resolution::Found(channel_id),
        Ok(None) => {
            tracing::debug!(query, "channel search returned no results");
            Resolution::NotFound
        }
        Err(e) => {
            tracing::warn!(query, error = %e, "channel search failed");
            Resolution::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_url_extracts_trailing_segment() {
        assert_eq!(
            ChannelRef::parse("https://www.youtube.com/channel/UC123abc"),
            ChannelRef::Canonical("UC123abc".to_string())
        );
    }

    #[test]
    fn parse_canonical_url_stops_at_next_slash() {
        assert_eq!(
            ChannelRef::parse("youtube.com/channel/UC123/videos"),
            ChannelRef::Canonical("UC123".to_string())
        );
    }

    #[test]
    fn parse_custom_url_is_unsupported() {
        assert_eq!(
            ChannelRef::parse("https://youtube.com/c/SomeChannel"),
            ChannelRef::Unsupported
        );
        assert_eq!(
            ChannelRef::parse("https://youtube.com/user/legacyname"),
            ChannelRef::Unsupported
        );
    }

    #[test]
    fn parse_handle_url_extracts_handle() {
        assert_eq!(
            ChannelRef::parse("https://youtube.com/@somehandle/featured"),
            ChannelRef::Handle("somehandle".to_string())
        );
    }

    #[test]
    fn parse_plain_text_is_a_name() {
        assert_eq!(
            ChannelRef::parse("Some Channel Name"),
            ChannelRef::Name("Some Channel Name".to_string())
        );
    }

    #[tokio::test]
    async fn canonical_url_resolves_without_network() {
        // Pointing at a closed port: any network attempt would fail, so a
        // Found result proves no call was made.
        let client = YoutubeClient::with_base_url("k", 1, "http://127.0.0.1:9/").expect("client");
        let resolution = resolve_channel(&client, "youtube.com/channel/UC123").await;
        assert_eq!(resolution, Resolution::Found("UC123".to_string()));
    }

    #[tokio::test]
    async fn custom_url_resolves_to_not_found_without_network() {
        let client = YoutubeClient::with_base_url("k", 1, "http://127.0.0.1:9/").expect("client");
        let resolution = resolve_channel(&client, "youtube.com/c/custom").await;
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn empty_canonical_segment_is_not_found() {
        let client = YoutubeClient::with_base_url("k", 1, "http://127.0.0.1:9/").expect("client");
        let resolution = resolve_channel(&client, "youtube.com/channel/").await;
        assert_eq!(resolution, Resolution::NotFound);
    }
}
