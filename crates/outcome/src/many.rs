//! Outcome of a query that yields zero or more entities.

use crate::{ErrorDetail, LazySequence, StatusCode};

/// Result of a multi-entity query.
///
/// There is no empty variant: a query with no matches is a
/// [`ManyOutcome::Stream`] whose sequence ends immediately.
///
/// The sequence is single-pass. Once it has been drained (through a `match`
/// on `&mut self` or through [`ManyOutcome::as_sequence`]) a second traversal
/// of the same outcome produces nothing. Issue the query again to get a fresh
/// sequence.
#[derive(Debug)]
#[must_use = "an outcome may be a failure that should be inspected"]
pub enum ManyOutcome<T> {
    /// The query succeeded; entities are produced as the sequence is pulled.
    Stream(LazySequence<T>),

    /// The query did not succeed.
    Failed {
        /// Transport status; [`StatusCode::TRANSPORT`] when no response was obtained.
        status: StatusCode,
        /// Message and optional cause.
        error: ErrorDetail,
    },
}

impl<T> ManyOutcome<T> {
    /// A successful query over `entities`, which are pulled lazily.
    pub fn stream<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::Stream(LazySequence::new(entities))
    }

    /// A failed query.
    pub fn failed(status: StatusCode, error: impl Into<ErrorDetail>) -> Self {
        Self::Failed {
            status,
            error: error.into(),
        }
    }

    /// Returns `true` for [`ManyOutcome::Stream`], drained or not.
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Returns `true` for [`ManyOutcome::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Status and detail of a failure, or `None` for a stream.
    pub fn failure(&self) -> Option<(StatusCode, &ErrorDetail)> {
        match self {
            Self::Failed { status, error } => Some((*status, error)),
            Self::Stream(_) => None,
        }
    }

    /// Takes the remaining sequence out of the outcome.
    ///
    /// For a stream, the outcome keeps an exhausted sequence, so a second call
    /// yields nothing. For a failure, an empty sequence is returned and the
    /// failure stays in place for later inspection.
    pub fn as_sequence(&mut self) -> LazySequence<T> {
        match self {
            Self::Stream(sequence) => sequence.take_remaining(),
            Self::Failed { status, error } => {
                tracing::debug!(
                    status = status.as_u16(),
                    error = %error,
                    "failed query treated as an empty sequence"
                );
                LazySequence::empty()
            }
        }
    }

    /// Consuming form of [`ManyOutcome::as_sequence`].
    pub fn into_sequence(mut self) -> LazySequence<T> {
        self.as_sequence()
    }
}

impl<T> IntoIterator for ManyOutcome<T> {
    type Item = T;
    type IntoIter = LazySequence<T>;

    fn into_iter(self) -> LazySequence<T> {
        self.into_sequence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn letters() -> ManyOutcome<char> {
        ManyOutcome::stream(vec!['a', 'b', 'c', 'd'])
    }

    #[test]
    fn full_traversal_yields_source_order_then_nothing() {
        let mut outcome = letters();

        let first: Vec<_> = outcome.as_sequence().collect();
        let second: Vec<_> = outcome.as_sequence().collect();

        assert_eq!(first, vec!['a', 'b', 'c', 'd']);
        assert!(second.is_empty());
        assert!(outcome.is_stream());
    }

    #[test]
    fn traversal_through_match_also_drains_the_outcome() {
        let mut outcome = letters();

        if let ManyOutcome::Stream(sequence) = &mut outcome {
            assert_eq!(sequence.count(), 4);
        }

        let ManyOutcome::Stream(sequence) = &mut outcome else {
            panic!("expected Stream");
        };
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn partial_traversal_does_not_allow_replay() {
        let mut outcome = letters();

        let prefix: Vec<_> = outcome.as_sequence().take(2).collect();
        let again: Vec<_> = outcome.as_sequence().collect();

        assert_eq!(prefix, vec!['a', 'b']);
        assert!(again.is_empty());
    }

    #[test]
    fn early_termination_leaves_later_elements_unproduced() {
        let produced = Arc::new(AtomicUsize::new(0));
        let counter = produced.clone();
        let outcome = ManyOutcome::stream((1u32..=10).map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        }));

        let total: u32 = outcome.into_iter().filter(|n| n % 2 == 1).take(2).sum();

        assert_eq!(total, 1 + 3);
        assert_eq!(produced.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn zero_results_is_a_stream_not_a_failure() {
        let mut outcome: ManyOutcome<u8> = ManyOutcome::stream(Vec::new());

        assert!(outcome.is_stream());
        assert!(outcome.failure().is_none());
        assert_eq!(outcome.as_sequence().count(), 0);
    }

    #[rstest]
    #[case(0, "connection reset")]
    #[case(429, "too many requests")]
    #[case(500, "internal error")]
    fn failed_yields_empty_sequence_but_keeps_detail(#[case] code: u16, #[case] message: &str) {
        let mut outcome: ManyOutcome<u8> = ManyOutcome::failed(StatusCode::new(code), message);

        assert_eq!(outcome.as_sequence().count(), 0);

        match outcome {
            ManyOutcome::Failed { status, error } => {
                assert_eq!(status.as_u16(), code);
                assert_eq!(error.message(), message);
            }
            ManyOutcome::Stream(_) => panic!("expected Failed"),
        }
    }
}
