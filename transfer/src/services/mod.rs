//! Transfer services: catalog clients, authorization, and pipeline stages

pub mod authorizer;
pub mod http;
pub mod playlist_writer;
pub mod source_reader;
pub mod spotify_client;
pub mod track_resolver;
pub mod youtube_client;

#[cfg(test)]
pub mod tests;

pub use authorizer::*;
pub use playlist_writer::*;
pub use source_reader::*;
pub use spotify_client::*;
pub use track_resolver::*;
pub use youtube_client::*;
