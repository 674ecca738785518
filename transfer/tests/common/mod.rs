//! In-memory catalogs for pipeline tests

#![allow(dead_code)] // Not every test binary uses every helper

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use shared::{CatalogFailure, NewPlaylist, PlaylistHandle, PlaylistId, SourceItem, SourcePage, TrackCandidate};
use transfer::{DestinationCatalog, SourceCatalog};

/// Source catalog serving a fixed item list in pages
pub struct FakeSource {
    title: Option<String>,
    items: Vec<SourceItem>,
    page_size: usize,
    page_requests: Mutex<Vec<Option<String>>>,
}

impl FakeSource {
    pub fn new(title: &str, titles: Vec<String>, page_size: usize) -> Self {
        Self {
            title: Some(title.to_string()),
            items: titles
                .into_iter()
                .enumerate()
                .map(|(i, raw_title)| SourceItem {
                    id: format!("video-{i}"),
                    raw_title,
                })
                .collect(),
            page_size,
            page_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            title: None,
            items: Vec::new(),
            page_size: 50,
            page_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn page_requests(&self) -> Vec<Option<String>> {
        self.page_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceCatalog for FakeSource {
    async fn playlist_title(&self, _playlist_id: &PlaylistId) -> Result<Option<String>, CatalogFailure> {
        Ok(self.title.clone())
    }

    async fn list_playlist_items(
        &self,
        _playlist_id: &PlaylistId,
        page_token: Option<String>,
    ) -> Result<SourcePage, CatalogFailure> {
        self.page_requests.lock().unwrap().push(page_token.clone());

        let start = match page_token {
            Some(token) => token
                .strip_prefix("offset-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| CatalogFailure::InvalidResponse(format!("bad token {token}")))?,
            None => 0,
        };
        let end = (start + self.page_size).min(self.items.len());

        Ok(SourcePage {
            items: self.items[start..end].to_vec(),
            next_page_token: (end < self.items.len()).then(|| format!("offset-{end}")),
        })
    }
}

/// Destination catalog with a fixed set of findable queries that records writes
pub struct FakeDestination {
    known: HashMap<String, TrackCandidate>,
    failing_queries: Vec<String>,
    search_delay: Option<fn(&str) -> Duration>,
    fail_user_lookup: bool,
    fail_add_on_batch: Option<usize>,
    add_attempts: Mutex<usize>,
    searches: Mutex<Vec<String>>,
    user_lookups: Mutex<usize>,
    created: Mutex<Vec<NewPlaylist>>,
    add_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeDestination {
    pub fn new() -> Self {
        Self {
            known: HashMap::new(),
            failing_queries: Vec::new(),
            search_delay: None,
            fail_user_lookup: false,
            fail_add_on_batch: None,
            add_attempts: Mutex::new(0),
            searches: Mutex::new(Vec::new()),
            user_lookups: Mutex::new(0),
            created: Mutex::new(Vec::new()),
            add_calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `query` resolve to a track whose id is derived from the query
    pub fn knowing(mut self, queries: impl IntoIterator<Item = String>) -> Self {
        for query in queries {
            let candidate = TrackCandidate {
                id: track_id_for(&query),
                title: query.clone(),
                artists: vec!["Fake Artist".to_string()],
            };
            self.known.insert(query, candidate);
        }
        self
    }

    pub fn failing_on(mut self, query: &str) -> Self {
        self.failing_queries.push(query.to_string());
        self
    }

    pub fn failing_user_lookup(mut self) -> Self {
        self.fail_user_lookup = true;
        self
    }

    /// Reject the `batch`-th add-items call (1-based); earlier batches land
    pub fn failing_add_on_batch(mut self, batch: usize) -> Self {
        self.fail_add_on_batch = Some(batch);
        self
    }

    pub fn with_search_delay(mut self, delay: fn(&str) -> Duration) -> Self {
        self.search_delay = Some(delay);
        self
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn user_lookups(&self) -> usize {
        *self.user_lookups.lock().unwrap()
    }

    pub fn created(&self) -> Vec<NewPlaylist> {
        self.created.lock().unwrap().clone()
    }

    pub fn add_call_sizes(&self) -> Vec<usize> {
        self.add_calls.lock().unwrap().iter().map(Vec::len).collect()
    }

    /// Resulting playlist contents, in insertion order
    pub fn playlist_tracks(&self) -> Vec<String> {
        self.add_calls.lock().unwrap().concat()
    }
}

pub fn track_id_for(query: &str) -> String {
    format!("spotify:track:{}", query.replace(' ', "_"))
}

#[async_trait]
impl DestinationCatalog for FakeDestination {
    async fn current_user_id(&self) -> Result<String, CatalogFailure> {
        *self.user_lookups.lock().unwrap() += 1;
        if self.fail_user_lookup {
            return Err(CatalogFailure::AuthenticationFailed);
        }
        Ok("fake-user".to_string())
    }

    async fn search_tracks(&self, query: &str, _limit: u32) -> Result<Vec<TrackCandidate>, CatalogFailure> {
        if let Some(delay) = self.search_delay {
            tokio::time::sleep(delay(query)).await;
        }
        self.searches.lock().unwrap().push(query.to_string());

        if self.failing_queries.iter().any(|q| q == query) {
            return Err(CatalogFailure::ServerError("HTTP 500".to_string()));
        }
        Ok(self.known.get(query).cloned().into_iter().collect())
    }

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<PlaylistHandle, CatalogFailure> {
        self.created.lock().unwrap().push(playlist);
        Ok(PlaylistHandle {
            id: "fake-playlist".to_string(),
            url: "https://open.spotify.com/playlist/fake-playlist".to_string(),
        })
    }

    async fn add_items(&self, _playlist: &PlaylistHandle, track_ids: Vec<String>) -> Result<(), CatalogFailure> {
        let attempt = {
            let mut attempts = self.add_attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_add_on_batch == Some(attempt) {
            return Err(CatalogFailure::RateLimitExceeded);
        }
        self.add_calls.lock().unwrap().push(track_ids);
        Ok(())
    }
}

pub const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PL_ab12-XY";

/// Titles "Song 0" .. "Song n-1" decorated the way uploads usually are
pub fn decorated_titles(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Song {i} (Official Video) [HD]"))
        .collect()
}

pub fn plain_queries(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Song {i}")).collect()
}
