//! Mapping of HTTP responses onto outcome variants.
//!
//! These functions work on already-read status and body text so the mapping
//! rules can be tested without a server.

use outcome::{ErrorDetail, SingleOutcome, StatusCode};
use serde::de::DeserializeOwned;

const NO_CONTENT: u16 = 204;

/// Returns `true` if a successful body means "nothing matched".
pub(crate) fn is_absent_body(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body == "null"
}

/// Decodes the body of a successful single-entity response.
///
/// A `204`, an empty body or a JSON `null` is `Empty`. A body that does not
/// decode as `T` is `Failed` with the response status and the decode error as
/// cause.
pub(crate) fn decode_single<T>(status: StatusCode, body: &str) -> SingleOutcome<T>
where
    T: DeserializeOwned,
{
    if status.as_u16() == NO_CONTENT || is_absent_body(body) {
        return SingleOutcome::empty();
    }
    match serde_json::from_str(body) {
        Ok(value) => SingleOutcome::found(value),
        Err(err) => SingleOutcome::failed(
            status,
            ErrorDetail::with_cause("failed to decode response body", err),
        ),
    }
}

/// Maps the body read of a successful single-entity response.
///
/// The response head has arrived, so a body that cannot be read is `Failed`
/// with the received status rather than the transport sentinel.
pub(crate) fn read_single<T, E>(status: StatusCode, body: Result<String, E>) -> SingleOutcome<T>
where
    T: DeserializeOwned,
    E: std::error::Error + Send + Sync + 'static,
{
    match body {
        Ok(body) => decode_single(status, &body),
        Err(err) => SingleOutcome::failed(
            status,
            ErrorDetail::with_cause("failed to read response body", err),
        ),
    }
}

/// Builds the failure detail for a non-success response.
///
/// An unreadable body falls back to the reason phrase and is kept as cause.
pub(crate) fn rejection_detail<E>(
    status: StatusCode,
    reason: Option<&str>,
    body: Result<String, E>,
) -> ErrorDetail
where
    E: std::error::Error + Send + Sync + 'static,
{
    match body {
        Ok(body) => ErrorDetail::new(failure_message(status, reason, &body)),
        Err(err) => {
            tracing::warn!(
                status = status.as_u16(),
                error = %err,
                "failed to read rejection body"
            );
            ErrorDetail::with_cause(failure_message(status, reason, ""), err)
        }
    }
}

/// Builds the failure message for a non-success response.
///
/// Precedence: a string `"error"` field of a JSON body, then the trimmed body
/// text, then the status reason phrase, then the bare status.
pub(crate) fn failure_message(status: StatusCode, reason: Option<&str>, body: &str) -> String {
    let body = body.trim();

    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(serde_json::Value::String(error)) = fields.get("error") {
            return error.clone();
        }
    }

    if !body.is_empty() {
        return body.to_string();
    }

    match reason {
        Some(reason) => reason.to_string(),
        None => format!("HTTP status {status}"),
    }
}
