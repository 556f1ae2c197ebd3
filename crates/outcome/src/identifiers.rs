//! Newtype identifiers attached to outcomes and calls.
//!
//! A transport status is a plain integer on the wire, but giving it its own
//! type keeps it from being confused with counts or page numbers and gives a
//! single home to the "no response at all" sentinel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Transport status
// ---------------------------------------------------------------------------

/// Transport-level status of a failed call.
///
/// Carries the HTTP status when the remote answered, or
/// [`StatusCode::TRANSPORT`] when no response was obtained (connection refused,
/// timeout, TLS failure, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Sentinel for local or network failures where no remote status exists.
    pub const TRANSPORT: StatusCode = StatusCode(0);

    /// Creates a status from a raw integer.
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` if no remote response was obtained.
    pub fn is_transport(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for `4xx` statuses.
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Returns `true` for `5xx` statuses.
    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Call correlation
// ---------------------------------------------------------------------------

/// Identifies one logical call to a source.
///
/// Generated fresh for every `fetch_*` invocation and recorded on its tracing
/// span, so the events emitted while a lazy sequence is drained can be tied
/// back to the request that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(Uuid);

impl CallId {
    /// Generates a new random call identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying [`Uuid`].
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true, false, false)]
    #[case(200, false, false, false)]
    #[case(404, false, true, false)]
    #[case(429, false, true, false)]
    #[case(503, false, false, true)]
    fn status_classes(
        #[case] raw: u16,
        #[case] transport: bool,
        #[case] client: bool,
        #[case] server: bool,
    ) {
        let status = StatusCode::new(raw);
        assert_eq!(status.is_transport(), transport);
        assert_eq!(status.is_client_error(), client);
        assert_eq!(status.is_server_error(), server);
    }

    #[test]
    fn transport_sentinel_is_zero() {
        assert_eq!(StatusCode::TRANSPORT.as_u16(), 0);
        assert_eq!(StatusCode::TRANSPORT.to_string(), "0");
    }

    #[test]
    fn call_ids_are_unique() {
        assert_ne!(CallId::new_random(), CallId::new_random());
    }
}
