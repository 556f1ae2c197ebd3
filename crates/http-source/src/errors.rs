//! Errors raised while setting up an [`crate::HttpSource`].
//!
//! Only construction can fail with a Rust error. Once a source exists, every
//! call failure is reported inside the returned outcome.

use thiserror::Error;

/// Failure to build an HTTP source from its configuration.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL is empty or does not use `http`/`https`.
    #[error("invalid base URL '{url}': expected an http:// or https:// URL")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
    },

    /// The timeout is zero.
    #[error("invalid timeout: must be at least one second")]
    InvalidTimeout,

    /// The token cannot be sent as a header value.
    #[error("invalid token: contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The underlying HTTP client could not be constructed (e.g. TLS backend
    /// initialisation failed).
    #[error("failed to build HTTP client")]
    Build(#[from] reqwest::Error),
}
