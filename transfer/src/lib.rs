//! Playlist transfer library
//!
//! Migrates a YouTube playlist into a new private Spotify playlist: video
//! titles are cleaned into search queries, each query is resolved to a
//! track, and the matches are written in batches to the new playlist.

pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{AuthConfig, ServiceAuth, TokenGrant};
pub use error::{TransferError, TransferResult, WriteStage};
pub use pipeline::TransferPipeline;
pub use traits::*;
pub use types::*;
