//! Recent-upload title retrieval.

use framelens_core::normalize_title;

use crate::client::YoutubeClient;

/// Fetches up to `max_results` recent upload titles for a channel.
///
/// Two-step protocol: look up the channel's "uploads" playlist, then list its
/// items. Every title is normalized (single line, single spaces) and empty
/// survivors are dropped.
///
/// Returns an empty vec when the channel lookup yields no items or when
/// either network step fails — the caller treats empty as "could not retrieve
/// titles". The failure reason is intentionally discarded here (logged, then
/// dropped).
pub async fn list_recent_titles(
    client: &YoutubeClient,
    channel_id: &str,
    max_results: u32,
) -> Vec<String> {
    let playlist_id = match client.uploads_playlist_id(channel_id).await {
        Ok(Some(playlist_id)) => playlist_id,
        Ok(None) => {
            tracing::debug!(channel_id, "channel lookup returned no items");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(channel_id, error = %e, "uploads playlist lookup failed");
            return Vec::new();
        }
    };

    match client.playlist_titles(&playlist_id, max_results).await {
        Ok(titles) => titles
            .iter()
            .map(|t| normalize_title(t))
            .filter(|t| !t.is_empty())
            .collect(),
        Err(e) => {
            tracing::warn!(channel_id, playlist_id, error = %e, "playlist items fetch failed");
            Vec::new()
        }
    }
}
