//! Destination playlist creation and batched population

use shared::{logging, stage_info, NewPlaylist, Stage, Visibility};

use crate::error::{TransferError, TransferResult, WriteStage};
use crate::traits::DestinationCatalog;
use crate::types::{TransferOptions, MAX_ITEMS_PER_ADD};

/// Creates a private playlist and fills it in order
pub struct PlaylistWriter<'a, D: DestinationCatalog + ?Sized> {
    catalog: &'a D,
    options: &'a TransferOptions,
}

impl<'a, D: DestinationCatalog + ?Sized> PlaylistWriter<'a, D> {
    pub fn new(catalog: &'a D, options: &'a TransferOptions) -> Self {
        Self { catalog, options }
    }

    /// Create the playlist and add `track_ids` in batches of at most
    /// [`MAX_ITEMS_PER_ADD`], returning the playlist URL
    ///
    /// A failed batch aborts the write; the playlist keeps whatever earlier
    /// batches added and the error carries its URL.
    pub async fn create_and_populate(
        &self,
        owner_id: &str,
        display_name: &str,
        track_ids: &[String],
    ) -> TransferResult<String> {
        let request = NewPlaylist {
            owner_id: owner_id.to_string(),
            name: format!("{}{}", display_name, self.options.playlist_suffix),
            visibility: Visibility::Private,
            description: self.options.description.clone(),
        };

        stage_info!(Stage::Write, "📝 Creating playlist '{}'", request.name);

        let handle = self
            .catalog
            .create_playlist(request)
            .await
            .map_err(|reason| TransferError::WriteFailure {
                stage: WriteStage::CreatePlaylist,
                playlist_url: None,
                tracks_added: 0,
                reason,
            })?;

        let total_batches = track_ids.len().div_ceil(MAX_ITEMS_PER_ADD);
        let mut tracks_added = 0usize;

        for (index, batch) in track_ids.chunks(MAX_ITEMS_PER_ADD).enumerate() {
            let batch_end = tracks_added + batch.len();
            stage_info!(
                Stage::Write,
                "Adding songs {}-{} to playlist",
                tracks_added + 1,
                batch_end
            );

            if let Err(reason) = self.catalog.add_items(&handle, batch.to_vec()).await {
                let error = TransferError::WriteFailure {
                    stage: WriteStage::AddItems {
                        batch: index + 1,
                        of: total_batches,
                    },
                    playlist_url: Some(handle.url.clone()),
                    tracks_added,
                    reason,
                };
                logging::log_error(Stage::Write, "Adding tracks", &error);
                return Err(error);
            }

            tracks_added = batch_end;
        }

        Ok(handle.url)
    }
}
