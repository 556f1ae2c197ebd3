//! Outcome of a lookup that yields at most one entity.

use crate::{ErrorDetail, MissingValue, StatusCode};

/// Result of a single-entity lookup.
///
/// Exactly one variant holds. Absence ([`SingleOutcome::Empty`]) is a
/// successful result and is never reported as [`SingleOutcome::Failed`].
///
/// Prefer `match`, [`SingleOutcome::map_or`] or [`SingleOutcome::into_option`]
/// for extraction; [`SingleOutcome::unwrap`] is an escape hatch that panics
/// when there is nothing to return.
#[derive(Debug, Clone)]
#[must_use = "an outcome may be a failure that should be inspected"]
pub enum SingleOutcome<T> {
    /// The entity was retrieved.
    Found(T),

    /// The call succeeded but no entity matched.
    Empty,

    /// The call did not succeed.
    Failed {
        /// Transport status; [`StatusCode::TRANSPORT`] when no response was obtained.
        status: StatusCode,
        /// Message and optional cause.
        error: ErrorDetail,
    },
}

impl<T> SingleOutcome<T> {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// A successful lookup holding `value`.
    pub fn found(value: T) -> Self {
        Self::Found(value)
    }

    /// A successful lookup that matched nothing.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// A failed lookup.
    pub fn failed(status: StatusCode, error: impl Into<ErrorDetail>) -> Self {
        Self::Failed {
            status,
            error: error.into(),
        }
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Returns `true` for [`SingleOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` for [`SingleOutcome::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for [`SingleOutcome::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Status and detail of a failure, or `None` for the successful variants.
    pub fn failure(&self) -> Option<(StatusCode, &ErrorDetail)> {
        match self {
            Self::Failed { status, error } => Some((*status, error)),
            Self::Found(_) | Self::Empty => None,
        }
    }

    // -----------------------------------------------------------------------
    // Extraction
    // -----------------------------------------------------------------------

    /// Returns the value, panicking if there is none.
    ///
    /// This is a deliberate trapdoor for code that has already established
    /// the outcome is `Found`. A panic here is a bug in the caller; do not
    /// catch it to detect absence or failure.
    ///
    /// # Panics
    ///
    /// Panics with the [`MissingValue`] message on `Empty` and `Failed`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_get() {
            Ok(value) => value,
            Err(missing) => panic!("called `SingleOutcome::unwrap()` without a value: {missing}"),
        }
    }

    /// Returns the value, or the [`MissingValue`] fault describing why there
    /// is none.
    pub fn try_get(self) -> Result<T, MissingValue> {
        match self {
            Self::Found(value) => Ok(value),
            Self::Empty => Err(MissingValue::Empty),
            Self::Failed { status, error } => Err(MissingValue::Failed {
                status,
                message: error.message,
            }),
        }
    }

    /// Converts to an [`Option`], discarding any failure detail.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Empty | Self::Failed { .. } => None,
        }
    }

    /// Borrowing form of [`SingleOutcome::into_option`].
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Empty | Self::Failed { .. } => None,
        }
    }

    /// Applies `f` to the value if `Found`, otherwise returns `default`.
    ///
    /// `f` is never invoked for `Empty` or `Failed`.
    pub fn map_or<R, F>(self, default: R, f: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Found(value) => f(value),
            Self::Empty | Self::Failed { .. } => default,
        }
    }

    /// Like [`SingleOutcome::map_or`], computing the fallback only when needed.
    pub fn map_or_else<R, D, F>(self, default: D, f: F) -> R
    where
        D: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Found(value) => f(value),
            Self::Empty | Self::Failed { .. } => default(),
        }
    }

    // -----------------------------------------------------------------------
    // Combinators
    // -----------------------------------------------------------------------

    /// Transforms the value while keeping the variant.
    pub fn map<U, F>(self, f: F) -> SingleOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Found(value) => SingleOutcome::Found(f(value)),
            Self::Empty => SingleOutcome::Empty,
            Self::Failed { status, error } => SingleOutcome::Failed { status, error },
        }
    }

    /// Borrows the value, keeping the variant. Failure detail is cloned.
    pub fn as_ref(&self) -> SingleOutcome<&T> {
        match self {
            Self::Found(value) => SingleOutcome::Found(value),
            Self::Empty => SingleOutcome::Empty,
            Self::Failed { status, error } => SingleOutcome::Failed {
                status: *status,
                error: error.clone(),
            },
        }
    }
}

impl<T> From<Option<T>> for SingleOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn failed_404() -> SingleOutcome<u32> {
        SingleOutcome::failed(StatusCode::new(404), "not found")
    }

    #[test]
    fn found_dispatches_to_found_and_maps() {
        let outcome = SingleOutcome::found(7u32);

        assert!(matches!(outcome, SingleOutcome::Found(7)));
        assert_eq!(outcome.clone().map_or(0, |v| v * 2), 14);
        assert_eq!(outcome.clone().into_option(), Some(7));
        assert_eq!(outcome.unwrap(), 7);
    }

    #[rstest]
    #[case::empty(SingleOutcome::empty())]
    #[case::failed(failed_404())]
    #[case::transport(SingleOutcome::failed(StatusCode::TRANSPORT, "connection refused"))]
    fn no_value_returns_default_without_calling_transform(#[case] outcome: SingleOutcome<u32>) {
        let calls = Cell::new(0);

        let result = outcome.clone().map_or(99, |v| {
            calls.set(calls.get() + 1);
            v
        });

        assert_eq!(result, 99);
        assert_eq!(calls.get(), 0);
        assert_eq!(outcome.as_option(), None);
        assert_eq!(outcome.into_option(), None);
    }

    #[test]
    fn map_or_else_only_computes_default_when_needed() {
        let found = SingleOutcome::found("x").map_or_else(|| panic!("default computed"), str::len);
        assert_eq!(found, 1);

        let empty: SingleOutcome<&str> = SingleOutcome::empty();
        assert_eq!(empty.map_or_else(|| 42, str::len), 42);
    }

    #[rstest]
    #[case(0, "connection refused")]
    #[case(404, "not found")]
    #[case(500, "internal error")]
    fn failed_exposes_status_and_message(#[case] code: u16, #[case] message: &str) {
        let outcome: SingleOutcome<()> = SingleOutcome::failed(StatusCode::new(code), message);

        match outcome {
            SingleOutcome::Failed { status, error } => {
                assert_eq!(status, StatusCode::new(code));
                assert_eq!(error.message, message);
            }
            SingleOutcome::Found(_) | SingleOutcome::Empty => panic!("expected Failed"),
        }
    }

    #[test]
    fn try_get_reports_missing_value() {
        let empty: SingleOutcome<u32> = SingleOutcome::empty();
        assert_eq!(empty.try_get(), Err(MissingValue::Empty));

        assert_eq!(
            failed_404().try_get(),
            Err(MissingValue::Failed {
                status: StatusCode::new(404),
                message: "not found".to_string(),
            })
        );
    }

    #[test]
    #[should_panic(expected = "no entity")]
    fn unwrap_on_empty_panics() {
        let empty: SingleOutcome<u32> = SingleOutcome::empty();
        let _ = empty.unwrap();
    }

    #[test]
    #[should_panic(expected = "status 404")]
    fn unwrap_on_failed_panics() {
        let _ = failed_404().unwrap();
    }

    #[test]
    fn map_preserves_variant() {
        assert!(matches!(
            SingleOutcome::found(2).map(|v| v + 1),
            SingleOutcome::Found(3)
        ));
        assert!(SingleOutcome::<u32>::empty().map(|v| v + 1).is_empty());

        let mapped = failed_404().map(|v| v.to_string());
        assert_eq!(mapped.failure().map(|(s, _)| s), Some(StatusCode::new(404)));
    }

    #[test]
    fn failure_is_none_for_successful_variants() {
        assert!(SingleOutcome::found(1).failure().is_none());
        assert!(SingleOutcome::<u8>::empty().failure().is_none());
        assert!(failed_404().is_failed());
    }

    #[test]
    fn from_option_never_produces_failed() {
        assert!(SingleOutcome::from(Some(1)).is_found());
        assert!(SingleOutcome::<u8>::from(None).is_empty());
    }
}
