//! Single-pass, lazily produced sequence of entities.
//!
//! A [`LazySequence`] wraps a producer iterator and pulls from it only when
//! the consumer asks for the next element. It has one forward-only cursor:
//! there is no rewind and no buffering, so memory use stays flat even when
//! the producer is a long streamed response.
//!
//! Once the producer reports the end (or is cut short by its owner), it is
//! dropped and every further `next()` returns `None` without touching it.
//!
//! ## Concurrency
//!
//! Advancing the cursor needs `&mut self`. Concurrent traversal of one
//! instance is therefore rejected by the borrow checker; a sequence can be
//! moved to another thread (`Send`) but not shared (`!Sync`).

use std::iter::FusedIterator;

type Producer<T> = Box<dyn Iterator<Item = T> + Send + 'static>;

/// A forward-only, on-demand sequence of `T`.
pub struct LazySequence<T> {
    producer: Option<Producer<T>>,
}

impl<T> LazySequence<T> {
    /// Wraps a producer. Nothing is pulled from it until the sequence is
    /// iterated.
    pub fn new<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self {
            producer: Some(Box::new(producer.into_iter())),
        }
    }

    /// A sequence that ends immediately.
    pub fn empty() -> Self {
        Self { producer: None }
    }

    /// Returns `true` once the producer has been exhausted or released.
    ///
    /// A `false` result does not promise another element: the producer may
    /// still end on the next pull.
    pub fn is_exhausted(&self) -> bool {
        self.producer.is_none()
    }

    /// Moves the remaining elements into a new sequence and leaves this one
    /// exhausted.
    pub(crate) fn take_remaining(&mut self) -> Self {
        Self {
            producer: self.producer.take(),
        }
    }
}

impl<T> Iterator for LazySequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let producer = self.producer.as_mut()?;
        match producer.next() {
            Some(item) => Some(item),
            None => {
                self.producer = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.producer {
            Some(producer) => producer.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for LazySequence<T> {}

impl<T> Default for LazySequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects eagerly; used for simulated results built from in-memory values.
impl<T: Send + 'static> FromIterator<T> for LazySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> std::fmt::Debug for LazySequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySequence")
            .field("exhausted", &self.is_exhausted())
            .finish_non_exhaustive()
    }
}
