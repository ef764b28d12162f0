//! Error types for fetching listings and writing them out.

use crate::ebay::models::ListingApi;
use std::path::PathBuf;
use thiserror::Error;

/// Why a fetch from one of the eBay APIs produced no listings.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never got a response (DNS, connect, TLS, timeout)
    #[error("{api} API request failed: {message}")]
    Transport { api: ListingApi, message: String },

    /// The service answered with a non-2xx status
    #[error("{api} API returned status {status}{}", detail_suffix(.message))]
    Status { api: ListingApi, status: u16, message: String },

    /// The body was not valid JSON
    #[error("{api} API returned malformed JSON: {source}")]
    Decode {
        api: ListingApi,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered 2xx but reported a failure in the body
    #[error("{api} API reported an error: {message}")]
    Api { api: ListingApi, message: String },
}

impl FetchError {
    /// Returns the API the failed request was sent to.
    pub fn api(&self) -> ListingApi {
        match self {
            FetchError::Transport { api, .. }
            | FetchError::Status { api, .. }
            | FetchError::Decode { api, .. }
            | FetchError::Api { api, .. } => *api,
        }
    }

    /// True when repeating the same request later might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::Decode { .. } | FetchError::Api { .. } => false,
        }
    }
}

fn detail_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

/// Failure writing a listing table to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
