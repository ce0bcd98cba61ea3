//! Repositories module - Data access for RSVP entries
//!
//! `LocalCache` is the persisted fallback copy of submitted entries,
//! `SheetClient` talks to the external form endpoint and spreadsheet reader.

pub mod local_cache;
pub mod sheet;
pub mod traits;

use thiserror::Error;

pub use local_cache::LocalCache;
pub use sheet::{SheetClient, entries_from_rows};
pub use traits::{Create, Delete, Read, ReadAll, Update};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request to remote source failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote source answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("No RSVP data found")]
    NoData,
}
