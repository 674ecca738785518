//! Catalog trait definitions for dependency injection

use async_trait::async_trait;

use shared::{CatalogFailure, NewPlaylist, PlaylistHandle, PlaylistId, SourcePage, TrackCandidate};

/// Read-only access to the source video catalog
#[mockall::automock]
#[async_trait]
pub trait SourceCatalog: Send + Sync {
    /// Look up a playlist's display name; `None` when it doesn't exist or isn't visible
    async fn playlist_title(&self, playlist_id: &PlaylistId) -> Result<Option<String>, CatalogFailure>;

    /// Fetch one page of playlist items, starting at `page_token` when given
    async fn list_playlist_items(
        &self,
        playlist_id: &PlaylistId,
        page_token: Option<String>,
    ) -> Result<SourcePage, CatalogFailure>;
}

/// Read/write access to the destination music catalog
#[mockall::automock]
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// Identifier of the authorized user
    async fn current_user_id(&self) -> Result<String, CatalogFailure>;

    /// Search tracks matching free text, returning at most `limit` candidates
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackCandidate>, CatalogFailure>;

    /// Create an empty playlist
    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<PlaylistHandle, CatalogFailure>;

    /// Append tracks to a playlist in one call
    async fn add_items(&self, playlist: &PlaylistHandle, track_ids: Vec<String>) -> Result<(), CatalogFailure>;
}
