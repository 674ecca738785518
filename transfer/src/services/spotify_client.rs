//! Spotify Web API client implementing the destination catalog

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use shared::{CatalogFailure, NewPlaylist, PlaylistHandle, TrackCandidate};

use crate::error::TransferResult;
use crate::services::http::{
    build_http_client, check_status, decode_json, endpoint, network_failure, parse_base_url,
};
use crate::traits::DestinationCatalog;

/// Spotify client authorized with a playlist-modify bearer token
pub struct SpotifyClient {
    http: Client,
    api_base: Url,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    // search results occasionally contain null entries
    #[serde(default)]
    items: Vec<Option<TrackObject>>,
}

#[derive(Debug, Deserialize)]
struct TrackObject {
    uri: String,
    name: String,
    #[serde(default)]
    artists: Vec<ArtistObject>,
}

#[derive(Debug, Deserialize)]
struct ArtistObject {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreatedPlaylist {
    id: String,
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct ExternalUrls {
    spotify: String,
}

impl SpotifyClient {
    pub fn new(api_base: &str, access_token: impl Into<String>) -> TransferResult<Self> {
        Ok(Self {
            http: build_http_client()?,
            api_base: parse_base_url("Spotify", api_base)?,
            access_token: access_token.into(),
        })
    }
}

impl From<TrackObject> for TrackCandidate {
    fn from(track: TrackObject) -> Self {
        TrackCandidate {
            id: track.uri,
            title: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
        }
    }
}

#[async_trait]
impl DestinationCatalog for SpotifyClient {
    async fn current_user_id(&self) -> Result<String, CatalogFailure> {
        let url = endpoint(&self.api_base, &["me"])?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(network_failure)?;

        let profile: UserProfile = decode_json(response).await?;
        Ok(profile.id)
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackCandidate>, CatalogFailure> {
        let url = endpoint(&self.api_base, &["search"])?;
        let limit = limit.to_string();

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(network_failure)?;

        let search: SearchResponse = decode_json(response).await?;
        let candidates: Vec<TrackCandidate> = search
            .tracks
            .map(|page| page.items.into_iter().flatten().map(TrackCandidate::from).collect())
            .unwrap_or_default();

        debug!(query = %query, candidates = candidates.len(), "Track search complete");
        Ok(candidates)
    }

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<PlaylistHandle, CatalogFailure> {
        let url = endpoint(&self.api_base, &["users", playlist.owner_id.as_str(), "playlists"])?;

        let request_body = serde_json::json!({
            "name": playlist.name,
            "public": playlist.visibility.is_public(),
            "description": playlist.description,
        });

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&request_body)
            .send()
            .await
            .map_err(network_failure)?;

        let created: CreatedPlaylist = decode_json(response).await?;
        Ok(PlaylistHandle {
            id: created.id,
            url: created.external_urls.spotify,
        })
    }

    async fn add_items(&self, playlist: &PlaylistHandle, track_ids: Vec<String>) -> Result<(), CatalogFailure> {
        let url = endpoint(&self.api_base, &["playlists", playlist.id.as_str(), "tracks"])?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "uris": track_ids }))
            .send()
            .await
            .map_err(network_failure)?;

        check_status(response).await?;
        Ok(())
    }
}
