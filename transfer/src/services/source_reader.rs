//! Source playlist reading with cursor pagination and title normalization

use shared::{logging, stage_debug, stage_info, CatalogFailure, PlaylistId, Stage};

use crate::core::normalize;
use crate::error::{TransferError, TransferResult};
use crate::traits::SourceCatalog;
use crate::types::SourcePlaylist;

/// Reads every item of a source playlist into normalized queries
pub struct SourcePlaylistReader<'a, S: SourceCatalog + ?Sized> {
    catalog: &'a S,
}

impl<'a, S: SourceCatalog + ?Sized> SourcePlaylistReader<'a, S> {
    pub fn new(catalog: &'a S) -> Self {
        Self { catalog }
    }

    /// Fetch the playlist's title and all of its items, page by page
    ///
    /// Queries keep listing order; titles that normalize to nothing are
    /// dropped.
    pub async fn fetch(&self, playlist_id: &PlaylistId) -> TransferResult<SourcePlaylist> {
        let title = match self.catalog.playlist_title(playlist_id).await {
            Ok(Some(title)) => title,
            Ok(None) => {
                return Err(TransferError::NotFound {
                    playlist_id: playlist_id.clone(),
                })
            }
            Err(reason) => return Err(read_failure(playlist_id, reason)),
        };

        stage_info!(Stage::Read, "📋 Fetching contents of '{}'", title);

        let mut queries = Vec::new();
        let mut items_read = 0usize;
        let mut page_token: Option<String> = None;

        loop {
            let requested = page_token.clone();
            let page = self
                .catalog
                .list_playlist_items(playlist_id, page_token.take())
                .await
                .map_err(|reason| read_failure(playlist_id, reason))?;

            items_read += page.items.len();
            logging::log_progress(
                Stage::Read,
                "Processing videos",
                &format!("{} on this page, {} so far", page.items.len(), items_read),
            );

            for item in page.items {
                let query = normalize(&item.raw_title);
                if query.is_empty() {
                    stage_debug!(Stage::Read, "Dropping item {} with empty title '{}'", item.id, item.raw_title);
                } else {
                    queries.push(query);
                }
            }

            match page.next_page_token {
                Some(next) if requested.as_deref() == Some(next.as_str()) => {
                    return Err(read_failure(
                        playlist_id,
                        CatalogFailure::InvalidResponse(format!("pagination cursor {next} repeated")),
                    ));
                }
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        Ok(SourcePlaylist {
            title,
            queries,
            items_read,
        })
    }
}

fn read_failure(playlist_id: &PlaylistId, reason: CatalogFailure) -> TransferError {
    match reason {
        CatalogFailure::NotFound | CatalogFailure::Forbidden => TransferError::NotFound {
            playlist_id: playlist_id.clone(),
        },
        reason => TransferError::SourceRead {
            playlist_id: playlist_id.clone(),
            reason,
        },
    }
}
