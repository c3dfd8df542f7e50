//! Error types for the LNbits client.

use thiserror::Error;

/// Errors that can occur when talking to an LNbits instance.
#[derive(Debug, Error)]
pub enum LnbitsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pay link list was empty or no entry matched the requested id.
    #[error("no pay link matching id {0:?}")]
    NoMatchingPayLink(Option<i64>),

    /// Operation is part of the API surface but not implemented.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
