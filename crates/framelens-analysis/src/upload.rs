//! Upload adapter: title extraction from a user-supplied CSV.

use framelens_core::normalize_title;

use crate::error::AnalysisError;

/// Extracts video titles from uploaded CSV bytes.
///
/// Column selection: the first header whose lower-cased name contains
/// `"title"` or `"video"` wins. Empty cells are dropped before
/// normalization; titles that normalize to empty are dropped after.
///
/// # Errors
///
/// - [`AnalysisError::CsvRead`] if the bytes are not parseable CSV.
/// - [`AnalysisError::NoTitleColumn`] if no header matches.
pub fn extract_titles(file_bytes: &[u8]) -> Result<Vec<String>, AnalysisError> {
    let mut reader = csv::Reader::from_reader(file_bytes);

    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::CsvRead(e.to_string()))?
        .clone();

    let title_column = headers
        .iter()
        .position(|name| {
            let lowered = name.to_lowercase();
            lowered.contains("title") || lowered.contains("video")
        })
        .ok_or(AnalysisError::NoTitleColumn)?;

    let mut titles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::CsvRead(e.to_string()))?;
        let Some(raw) = record.get(title_column) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let title = normalize_title(raw);
        if !title.is_empty() {
            titles.push(title);
        }
    }

    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_normalizes_titles() {
        let csv = "Title\n\"Hello\nWorld\"\n\n\"  Second Title  \"\n";
        let titles = extract_titles(csv.as_bytes()).expect("titles");
        assert_eq!(titles, vec!["Hello World", "Second Title"]);
    }

    #[test]
    fn column_match_is_case_insensitive() {
        let csv = "VIDEO_TITLE\nFirst\n";
        let titles = extract_titles(csv.as_bytes()).expect("titles");
        assert_eq!(titles, vec!["First"]);
    }

    #[test]
    fn first_matching_column_wins() {
        // Both headers match; the earlier one is chosen.
        let csv = "Video,video_title\nfrom-video,from-video-title\n";
        let titles = extract_titles(csv.as_bytes()).expect("titles");
        assert_eq!(titles, vec!["from-video"]);
    }

    #[test]
    fn unrelated_headers_fail_with_no_title_column() {
        let csv = "id,name\n1,foo\n";
        let result = extract_titles(csv.as_bytes());
        assert!(matches!(result, Err(AnalysisError::NoTitleColumn)));
    }

    #[test]
    fn whitespace_only_cells_are_dropped() {
        let csv = "title\n\"   \"\nReal Title\n";
        let titles = extract_titles(csv.as_bytes()).expect("titles");
        assert_eq!(titles, vec!["Real Title"]);
    }

    #[test]
    fn empty_data_rows_yield_empty_vec() {
        let csv = "title\n";
        let titles = extract_titles(csv.as_bytes()).expect("titles");
        assert!(titles.is_empty());
    }
}
