//! Transfer pipeline with dependency injection

use shared::{logging, stage_info, MatchOutcome, Stage, TransferSummary};

use crate::core::extract_playlist_id;
use crate::error::{TransferError, TransferResult, WriteStage};
use crate::services::{PlaylistWriter, SourcePlaylistReader, TrackResolver};
use crate::traits::{DestinationCatalog, SourceCatalog};
use crate::types::TransferOptions;

/// Orchestrates one run: extract id, read, resolve, write, summarize
pub struct TransferPipeline<S, D>
where
    S: SourceCatalog,
    D: DestinationCatalog,
{
    pub source: S,
    pub destination: D,
    pub options: TransferOptions,
}

impl<S, D> TransferPipeline<S, D>
where
    S: SourceCatalog,
    D: DestinationCatalog,
{
    /// Create a pipeline over already-authorized catalogs
    pub fn new(source: S, destination: D, options: TransferOptions) -> Self {
        Self {
            source,
            destination,
            options,
        }
    }

    /// Copy the playlist behind `source_playlist_url` into a new destination playlist
    ///
    /// Fails before any network call on a bad URL, and before any write when
    /// the source is empty or nothing matched.
    pub async fn run(&self, source_playlist_url: &str) -> TransferResult<TransferSummary> {
        let playlist_id = extract_playlist_id(source_playlist_url)?;
        stage_info!(Stage::Extract, "Playlist id: {}", playlist_id);

        let source = SourcePlaylistReader::new(&self.source)
            .fetch(&playlist_id)
            .await?;

        if source.queries.is_empty() {
            return Err(TransferError::EmptySource { playlist_id });
        }
        logging::log_success(
            Stage::Read,
            &format!(
                "Found {} searchable videos ({} listed) in '{}'",
                source.queries.len(),
                source.items_read,
                source.title
            ),
        );

        let outcomes = TrackResolver::new(&self.destination, self.options.search_concurrency)
            .resolve(&source.queries)
            .await;

        stage_info!(
            Stage::Resolve,
            "Matched {} of {} queries",
            outcomes.iter().filter(|o| o.is_matched()).count(),
            outcomes.len()
        );

        let (track_ids, unmatched_queries) = partition_outcomes(&outcomes);
        if track_ids.is_empty() {
            return Err(TransferError::NoMatches {
                attempted: outcomes.len(),
            });
        }

        let owner_id = self
            .destination
            .current_user_id()
            .await
            .map_err(|reason| TransferError::WriteFailure {
                stage: WriteStage::ResolveOwner,
                playlist_url: None,
                tracks_added: 0,
                reason,
            })?;

        let playlist_url = PlaylistWriter::new(&self.destination, &self.options)
            .create_and_populate(&owner_id, &source.title, &track_ids)
            .await?;

        logging::log_success(Stage::Write, &format!("Playlist ready: {playlist_url}"));

        Ok(TransferSummary {
            source_title: source.title,
            destination_playlist_url: playlist_url,
            matched_count: track_ids.len(),
            unmatched_queries,
        })
    }
}

/// Split outcomes into matched track ids and unmatched queries, keeping order
pub fn partition_outcomes(outcomes: &[MatchOutcome]) -> (Vec<String>, Vec<String>) {
    let track_ids = outcomes
        .iter()
        .filter_map(MatchOutcome::track_id)
        .map(str::to_string)
        .collect();
    let unmatched = outcomes
        .iter()
        .filter_map(MatchOutcome::unmatched_query)
        .map(str::to_string)
        .collect();

    (track_ids, unmatched)
}
