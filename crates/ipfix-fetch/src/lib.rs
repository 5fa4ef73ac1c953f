#![deny(unsafe_code)]

//! Acquisition of the IANA IPFIX registries over HTTPS.
//!
//! Each registry body is buffered into a rewindable in-memory reader, so the
//! parser sees the same stream contract whether a registry came from here or
//! from a local file.

use std::io::Cursor;

use tracing::info;

mod error;

pub use crate::error::FetchError;

/// Canonical location of the information-element registry.
pub const IANA_IE_URL: &str =
    "https://www.iana.org/assignments/ipfix/ipfix-information-elements.csv";

/// Canonical location of the data-type registry.
pub const IANA_DATA_TYPES_URL: &str =
    "https://www.iana.org/assignments/ipfix/ipfix-information-element-data-types.csv";

/// User agent string for registry requests.
const USER_AGENT_VALUE: &str = concat!("ipfix-iana-gen/", env!("CARGO_PKG_VERSION"));

/// A fully downloaded registry, positioned at the start.
pub type RegistryBuffer = Cursor<Vec<u8>>;

/// Fetch one registry into a rewindable buffer.
///
/// # Errors
///
/// Fails on any transport error or non-success HTTP status; nothing is
/// buffered partially.
pub fn fetch_registry(url: &str) -> Result<RegistryBuffer, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .build()
        .map_err(|source| network_error(url, source))?;
    let response = client
        .get(url)
        .send()
        .map_err(|source| network_error(url, source))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().map_err(|source| network_error(url, source))?;
    info!(url, bytes = body.len(), "downloaded registry");
    Ok(Cursor::new(body.to_vec()))
}

/// Fetch the element registry and the data-type registry from their
/// canonical locations, in that order.
pub fn download_registries() -> Result<(RegistryBuffer, RegistryBuffer), FetchError> {
    Ok((fetch_registry(IANA_IE_URL)?, fetch_registry(IANA_DATA_TYPES_URL)?))
}

fn network_error(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        source,
    }
}
