//! Human-facing summary of a finished transfer

use shared::TransferSummary;

/// Default number of unmatched queries listed before the remainder is counted
pub const DEFAULT_UNMATCHED_PREVIEW: usize = 10;

/// Render the end-of-run report
pub fn render_report(summary: &TransferSummary, preview: usize) -> String {
    let mut lines = vec![
        format!("🎉 Playlist created from '{}'", summary.source_title),
        format!("🔗 Playlist URL: {}", summary.destination_playlist_url),
        format!("✅ Matched tracks: {}", summary.matched_count),
    ];

    let unmatched = summary.unmatched_count();
    if unmatched > 0 {
        lines.push(format!("⚠️ {unmatched} songs could not be found:"));
        lines.extend(
            summary
                .unmatched_queries
                .iter()
                .take(preview)
                .map(|query| format!("  - {query}")),
        );
        if unmatched > preview {
            lines.push(format!("  ... and {} more", unmatched - preview));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_with_unmatched(count: usize) -> TransferSummary {
        TransferSummary {
            source_title: "Road Trip".to_string(),
            destination_playlist_url: "https://open.spotify.com/playlist/abc".to_string(),
            matched_count: 42,
            unmatched_queries: (1..=count).map(|i| format!("query {i}")).collect(),
        }
    }

    #[test]
    fn test_report_without_unmatched() {
        let report = render_report(&summary_with_unmatched(0), DEFAULT_UNMATCHED_PREVIEW);
        assert!(report.contains("https://open.spotify.com/playlist/abc"));
        assert!(report.contains("Matched tracks: 42"));
        assert!(!report.contains("could not be found"));
    }

    #[test]
    fn test_report_lists_all_when_under_preview() {
        let report = render_report(&summary_with_unmatched(3), DEFAULT_UNMATCHED_PREVIEW);
        assert!(report.contains("3 songs could not be found"));
        assert!(report.contains("  - query 1"));
        assert!(report.contains("  - query 3"));
        assert!(!report.contains("more"));
    }

    #[test]
    fn test_report_caps_preview_and_counts_remainder() {
        let report = render_report(&summary_with_unmatched(13), DEFAULT_UNMATCHED_PREVIEW);
        assert!(report.contains("13 songs could not be found"));
        assert!(report.contains("  - query 10\n"));
        assert!(!report.contains("  - query 11\n"));
        assert!(report.contains("... and 3 more"));
    }

    #[test]
    fn test_report_exactly_at_preview() {
        let report = render_report(&summary_with_unmatched(10), DEFAULT_UNMATCHED_PREVIEW);
        assert!(report.contains("  - query 10\n"));
        assert!(!report.contains("more"));
    }
}
