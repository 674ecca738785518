//! Transfer-specific data types

use crate::core::DEFAULT_UNMATCHED_PREVIEW;

/// Destination service per-call ceiling for add-items requests
pub const MAX_ITEMS_PER_ADD: usize = 100;

/// Default suffix appended to the source playlist name
pub const DEFAULT_PLAYLIST_SUFFIX: &str = " (YouTube Import)";

/// Default description of created playlists
pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Imported from YouTube playlist";

/// Source playlist after reading and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlaylist {
    pub title: String,
    /// Normalized queries in listing order, empty normalizations dropped
    pub queries: Vec<String>,
    /// Raw item count before normalization
    pub items_read: usize,
}

/// Tunables of a transfer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    /// Number of searches in flight at once; 1 runs them sequentially
    pub search_concurrency: usize,
    pub playlist_suffix: String,
    pub description: String,
    pub unmatched_preview: usize,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            search_concurrency: 1,
            playlist_suffix: DEFAULT_PLAYLIST_SUFFIX.to_string(),
            description: DEFAULT_PLAYLIST_DESCRIPTION.to_string(),
            unmatched_preview: DEFAULT_UNMATCHED_PREVIEW,
        }
    }
}
