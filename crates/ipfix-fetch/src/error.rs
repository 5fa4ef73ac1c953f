//! Error types for registry acquisition.

use thiserror::Error;

/// Errors that can occur while downloading a registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be built or sent, or the body read failed.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
