//! Shared types for the playlist transfer system
//!
//! Holds the domain types that cross component boundaries (source items,
//! track candidates, match outcomes, the run summary), the catalog failure
//! type, and the logging setup used by every binary.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
