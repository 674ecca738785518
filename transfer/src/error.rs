//! Transfer error types

use std::fmt;

use shared::{CatalogFailure, PlaylistId};
use thiserror::Error;

/// Result type for transfer operations
pub type TransferResult<T> = Result<T, TransferError>;

/// Step of the write stage at which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    ResolveOwner,
    CreatePlaylist,
    AddItems { batch: usize, of: usize },
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStage::ResolveOwner => write!(f, "resolving destination user"),
            WriteStage::CreatePlaylist => write!(f, "creating playlist"),
            WriteStage::AddItems { batch, of } => write!(f, "adding batch {batch}/{of}"),
        }
    }
}

/// Fatal errors of a transfer run
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Source playlist {playlist_id} not found or not accessible")]
    NotFound { playlist_id: PlaylistId },

    #[error("Source playlist {playlist_id} has no usable items")]
    EmptySource { playlist_id: PlaylistId },

    #[error("Reading source playlist {playlist_id} failed: {reason}")]
    SourceRead {
        playlist_id: PlaylistId,
        reason: CatalogFailure,
    },

    #[error("None of the {attempted} queries matched a destination track")]
    NoMatches { attempted: usize },

    #[error("Write failed while {stage} ({tracks_added} tracks added): {reason}")]
    WriteFailure {
        stage: WriteStage,
        playlist_url: Option<String>,
        tracks_added: usize,
        reason: CatalogFailure,
    },

    #[error("Authorization with {service} failed: {message}")]
    Authorization { service: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
