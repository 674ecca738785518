//! Pure transfer logic: title cleanup, URL parsing, reporting

pub mod normalizer;
pub mod playlist_url;
pub mod report;

pub use normalizer::{normalize, TitleNormalizer};
pub use playlist_url::extract_playlist_id;
pub use report::{render_report, DEFAULT_UNMATCHED_PREVIEW};
