//! Query-to-track resolution against the destination catalog

use futures_util::stream::{self, StreamExt};
use shared::{stage_info, stage_warn, MatchOutcome, Stage, UnmatchedReason};

use crate::traits::DestinationCatalog;

/// Candidates requested per search; the first one is always taken
pub const SEARCH_LIMIT: u32 = 1;

/// Resolves normalized queries to destination tracks
///
/// One search per query. A failed search only marks its own query as
/// unmatched; the remaining queries are still attempted.
pub struct TrackResolver<'a, D: DestinationCatalog + ?Sized> {
    catalog: &'a D,
    concurrency: usize,
}

impl<'a, D: DestinationCatalog + ?Sized> TrackResolver<'a, D> {
    /// `concurrency` bounds the searches in flight; 0 is treated as 1
    pub fn new(catalog: &'a D, concurrency: usize) -> Self {
        Self {
            catalog,
            concurrency: concurrency.max(1),
        }
    }

    /// Resolve every query, returning one outcome per query in input order
    pub async fn resolve(&self, queries: &[String]) -> Vec<MatchOutcome> {
        let total = queries.len();
        stage_info!(Stage::Resolve, "🔍 Searching for {} songs", total);

        // buffered() yields in submission order regardless of completion order
        stream::iter(queries.iter().enumerate())
            .map(|(index, query)| self.resolve_one(index + 1, total, query))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn resolve_one(&self, position: usize, total: usize, query: &str) -> MatchOutcome {
        match self.catalog.search_tracks(query, SEARCH_LIMIT).await {
            Ok(candidates) => match candidates.first() {
                Some(candidate) => {
                    stage_info!(
                        Stage::Resolve,
                        "✅ [{}/{}] Found: {} by {}",
                        position,
                        total,
                        candidate.title,
                        candidate.primary_artist()
                    );
                    MatchOutcome::matched(candidate)
                }
                None => {
                    stage_info!(Stage::Resolve, "❌ [{}/{}] Not found: {}", position, total, query);
                    MatchOutcome::Unmatched {
                        query: query.to_string(),
                        reason: UnmatchedReason::NoCandidates,
                    }
                }
            },
            Err(failure) => {
                stage_warn!(
                    Stage::Resolve,
                    "❌ [{}/{}] Search failed for '{}': {}",
                    position,
                    total,
                    query,
                    failure
                );
                MatchOutcome::Unmatched {
                    query: query.to_string(),
                    reason: UnmatchedReason::SearchFailed(failure),
                }
            }
        }
    }
}
