//! YouTube Data API client implementing the source catalog

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use shared::{CatalogFailure, PlaylistId, SourceItem, SourcePage};

use crate::error::TransferResult;
use crate::services::http::{build_http_client, decode_json, endpoint, network_failure, parse_base_url};
use crate::traits::SourceCatalog;

/// Largest page the playlistItems endpoint returns
pub const YOUTUBE_PAGE_SIZE: u32 = 50;

/// Read-only YouTube client authorized with a bearer token
pub struct YouTubeClient {
    http: Client,
    api_base: Url,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistListResponse {
    #[serde(default)]
    items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
struct PlaylistResource {
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItemResource>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemResource {
    id: String,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

impl YouTubeClient {
    pub fn new(api_base: &str, access_token: impl Into<String>) -> TransferResult<Self> {
        Ok(Self {
            http: build_http_client()?,
            api_base: parse_base_url("YouTube", api_base)?,
            access_token: access_token.into(),
        })
    }
}

#[async_trait]
impl SourceCatalog for YouTubeClient {
    async fn playlist_title(&self, playlist_id: &PlaylistId) -> Result<Option<String>, CatalogFailure> {
        let url = endpoint(&self.api_base, &["playlists"])?;
        debug!(playlist_id = %playlist_id, "Looking up playlist metadata");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("part", "snippet"), ("id", playlist_id.as_str())])
            .send()
            .await
            .map_err(network_failure)?;

        match decode_json::<PlaylistListResponse>(response).await {
            Ok(list) => Ok(list.items.into_iter().next().map(|p| p.snippet.title)),
            // private playlists surface as 403, deleted ones as 404
            Err(CatalogFailure::Forbidden | CatalogFailure::NotFound) => Ok(None),
            Err(failure) => Err(failure),
        }
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &PlaylistId,
        page_token: Option<String>,
    ) -> Result<SourcePage, CatalogFailure> {
        let url = endpoint(&self.api_base, &["playlistItems"])?;
        let page_size = YOUTUBE_PAGE_SIZE.to_string();

        let mut query = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id.as_str()),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token.as_deref() {
            query.push(("pageToken", token));
        }

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()
            .await
            .map_err(network_failure)?;

        let list: PlaylistItemListResponse = decode_json(response).await?;
        debug!(
            playlist_id = %playlist_id,
            items = list.items.len(),
            has_next = list.next_page_token.is_some(),
            "Fetched playlist page"
        );

        Ok(SourcePage {
            items: list
                .items
                .into_iter()
                .map(|item| SourceItem {
                    id: item.id,
                    raw_title: item.snippet.title,
                })
                .collect(),
            // an empty token is treated the same as a missing one
            next_page_token: list.next_page_token.filter(|token| !token.is_empty()),
        })
    }
}
