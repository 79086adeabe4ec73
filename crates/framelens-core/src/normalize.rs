//! Title and display-name normalization.
//!
//! Video titles arrive with embedded newlines and ragged whitespace from both
//! the YouTube API and uploaded CSVs; everything downstream (classifier
//! prompts, CSV export) assumes single-line, single-spaced titles.

/// Normalize a raw video title to a single-line, single-spaced string.
///
/// Newlines and carriage returns become spaces, runs of whitespace collapse
/// to one space, and leading/trailing whitespace is trimmed. Idempotent:
/// normalizing an already-normalized title returns it unchanged.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    raw.replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a filesystem/display-safe slug from a raw channel reference.
///
/// Replaces spaces, `@`, `/`, and `:` with underscores. This is the label a
/// download filename is built from, not a verified channel display name.
#[must_use]
pub fn display_slug(channel_input: &str) -> String {
    channel_input.replace([' ', '@', '/', ':'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_title_collapses_whitespace() {
        assert_eq!(normalize_title("  Hello   World  "), "Hello World");
    }

    #[test]
    fn normalize_title_strips_newlines_and_carriage_returns() {
        assert_eq!(normalize_title("Hello\nWorld"), "Hello World");
        assert_eq!(normalize_title("Hello\r\nWorld\r"), "Hello World");
    }

    #[test]
    fn normalize_title_is_idempotent() {
        let once = normalize_title("Breaking:\n  the   story\r\ncontinues");
        let twice = normalize_title(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "Breaking: the story continues");
    }

    #[test]
    fn normalize_title_empty_input_stays_empty() {
        assert_eq!(normalize_title("   \n\r  "), "");
    }

    #[test]
    fn display_slug_replaces_reserved_characters() {
        assert_eq!(
            display_slug("https://youtube.com/@Some Channel"),
            "https___youtube.com__Some_Channel"
        );
    }

    #[test]
    fn display_slug_passes_plain_names_through() {
        assert_eq!(display_slug("PlainName"), "PlainName");
    }
}
