//! Connection settings for [`crate::HttpSource`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one HTTP source.
///
/// A config without a token produces an anonymous ("basic") source; with a
/// token every request carries an `Authorization: Bearer` header.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host (optionally a path prefix) that request paths are
    /// appended to.
    pub base_url: String,

    /// Optional bearer token.
    pub token: Option<String>,

    /// Whole-request timeout in seconds. Applies to the initial response;
    /// a streamed body is read for as long as the consumer keeps pulling.
    pub timeout_secs: u64,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Anonymous access to `base_url`.
    pub fn basic(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Authenticated access to `base_url` using `token`.
    pub fn authenticated(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Returns the timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks the settings before a client is built from them.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidBaseUrl`] if the base URL is empty or not
    ///   `http`/`https`.
    /// - [`ClientError::InvalidTimeout`] if the timeout is zero.
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl {
                url: self.base_url.clone(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("playground/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
