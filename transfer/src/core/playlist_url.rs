//! Playlist identifier extraction

use std::sync::OnceLock;

use regex::Regex;
use shared::PlaylistId;

use crate::error::{TransferError, TransferResult};

static LIST_PARAM: OnceLock<Regex> = OnceLock::new();

/// Pull the playlist identifier out of a `...list=<id>...` URL
///
/// Runs before any network call; a URL without a usable `list=` token is
/// rejected as invalid input.
pub fn extract_playlist_id(playlist_url: &str) -> TransferResult<PlaylistId> {
    let pattern = LIST_PARAM
        .get_or_init(|| Regex::new(r"list=([A-Za-z0-9_-]+)").expect("list pattern is valid"));

    let raw = pattern
        .captures(playlist_url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| TransferError::InvalidInput {
            message: format!("could not find a list=<id> parameter in {playlist_url:?}"),
        })?;

    PlaylistId::new(raw).map_err(|e| TransferError::InvalidInput {
        message: e.to_string(),
    })
}
