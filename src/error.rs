// src/error.rs

//! Error types for the larder crate
//!
//! Two failure kinds cross the API boundary: request failures (non-success
//! HTTP status or transport-level trouble) and malformed responses. The
//! favorites store adds plain I/O errors on save; loading never fails.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the recipe API client and the favorites store
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status. The body is kept
    /// verbatim for diagnostics; a failed call never yields a partial
    /// parse.
    #[error("HTTP {status} from {url}: {body}")]
    Request {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response (connect, TLS,
    /// timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response parsed as JSON but did not have the expected shape
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// Writing the favorites file failed
    #[error("failed to persist favorites: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed
    #[error("failed to initialize HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}
