//! Failure payloads carried by outcomes, and the fault raised by the unchecked
//! accessor.
//!
//! [`ErrorDetail`] is data: it travels inside a `Failed` variant and is never
//! raised. [`MissingValue`] is the only fault the outcome model produces, and
//! only when a caller uses [`crate::SingleOutcome::unwrap`] or
//! [`crate::SingleOutcome::try_get`] on something other than `Found`.

use std::sync::Arc;

use thiserror::Error;

use crate::StatusCode;

/// Shared, type-erased underlying cause of a failure.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// Failure detail
// ---------------------------------------------------------------------------

/// Human-readable failure message plus an optional structured cause.
///
/// The cause is reference counted so an outcome (and the detail inside it)
/// stays cheaply cloneable regardless of what error produced it.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ErrorDetail {
    /// Description of what went wrong. For remote rejections this is derived
    /// from the response body when one was available.
    pub message: String,

    /// The error that produced this failure, if any (e.g. an I/O or decode
    /// error).
    #[source]
    pub cause: Option<Cause>,
}

impl ErrorDetail {
    /// Creates a detail with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a detail with a message and an underlying cause.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Returns the message as a string slice.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorDetail {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ---------------------------------------------------------------------------
// Misuse fault
// ---------------------------------------------------------------------------

/// Raised when a value is demanded from a `SingleOutcome` that has none.
///
/// This is a programmer error, not a modelled business outcome. Code that
/// needs to handle absence should match on the outcome or use
/// `into_option`/`map_or` instead of catching this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingValue {
    /// The call succeeded but nothing matched.
    #[error("no value present: the call succeeded but returned no entity")]
    Empty,

    /// The call failed.
    #[error("no value present: the call failed with status {status}: {message}")]
    Failed {
        /// Status of the failed call.
        status: StatusCode,
        /// Message from the failure detail.
        message: String,
    },
}
