//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CatalogFailure, SharedError, SharedResult};

/// Identifier of a source playlist, as found after `list=` in a playlist URL
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Wrap a raw identifier, rejecting anything outside `[A-Za-z0-9_-]+`
    pub fn new(raw: &str) -> SharedResult<Self> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(SharedError::InvalidPlaylistId {
                input: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a source playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub id: String,
    pub raw_title: String,
}

/// One page of a cursor-paginated source listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePage {
    pub items: Vec<SourceItem>,
    pub next_page_token: Option<String>,
}

/// A track returned by a destination-catalog search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCandidate {
    /// Identifier accepted by the destination's add-items call
    pub id: String,
    pub title: String,
    pub artists: Vec<String>,
}

impl TrackCandidate {
    /// Primary artist, or an empty string when the catalog lists none
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or("")
    }
}

/// Playlist visibility on the destination service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Request body for creating a destination playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub owner_id: String,
    pub name: String,
    pub visibility: Visibility,
    pub description: String,
}

/// Handle to a playlist created on the destination service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistHandle {
    pub id: String,
    pub url: String,
}

/// Why a query did not produce a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedReason {
    NoCandidates,
    SearchFailed(CatalogFailure),
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedReason::NoCandidates => write!(f, "no candidates"),
            UnmatchedReason::SearchFailed(failure) => write!(f, "search failed: {failure}"),
        }
    }
}

/// Per-query result of the resolution stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Matched {
        track_id: String,
        track_title: String,
        artist_name: String,
    },
    Unmatched {
        query: String,
        reason: UnmatchedReason,
    },
}

impl MatchOutcome {
    pub fn matched(candidate: &TrackCandidate) -> Self {
        MatchOutcome::Matched {
            track_id: candidate.id.clone(),
            track_title: candidate.title.clone(),
            artist_name: candidate.primary_artist().to_string(),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn track_id(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched { track_id, .. } => Some(track_id),
            MatchOutcome::Unmatched { .. } => None,
        }
    }

    pub fn unmatched_query(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched { .. } => None,
            MatchOutcome::Unmatched { query, .. } => Some(query),
        }
    }
}

/// Final result of one transfer run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSummary {
    pub source_title: String,
    pub destination_playlist_url: String,
    pub matched_count: usize,
    pub unmatched_queries: Vec<String>,
}

impl TransferSummary {
    pub fn unmatched_count(&self) -> usize {
        self.unmatched_queries.len()
    }
}

/// Pipeline stage, attached to log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Authorize,
    Extract,
    Read,
    Resolve,
    Write,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Authorize => write!(f, "authorize"),
            Stage::Extract => write!(f, "extract"),
            Stage::Read => write!(f, "read"),
            Stage::Resolve => write!(f, "resolve"),
            Stage::Write => write!(f, "write"),
            Stage::Report => write!(f, "report"),
        }
    }
}
