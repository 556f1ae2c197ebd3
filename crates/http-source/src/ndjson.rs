//! Lazy decoder for newline-delimited JSON bodies.

use std::io::{BufRead, Lines};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::Span;

/// Iterator over a body holding one JSON document per line.
///
/// Each call to `next` reads just enough of the body for one entity. Blank
/// lines are skipped (servers send them as keep-alives). A read error or an
/// undecodable line ends the sequence; entities already yielded stay valid.
pub struct NdjsonSequence<T, R> {
    lines: Lines<R>,
    span: Span,
    yielded: usize,
    finished: bool,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> NdjsonSequence<T, R>
where
    R: BufRead,
{
    /// Wraps `reader`. Events raised while reading are recorded under `span`.
    pub fn new(reader: R, span: Span) -> Self {
        Self {
            lines: reader.lines(),
            span,
            yielded: 0,
            finished: false,
            _entity: PhantomData,
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        tracing::debug!(yielded = self.yielded, "stream ended");
    }
}

impl<T, R> Iterator for NdjsonSequence<T, R>
where
    T: DeserializeOwned,
    R: BufRead,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        let span = self.span.clone();
        let _entered = span.enter();

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    tracing::warn!(error = %err, yielded = self.yielded, "stream read failed; ending sequence");
                    self.finish();
                    return None;
                }
                None => {
                    self.finish();
                    return None;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => {
                    self.yielded += 1;
                    return Some(entity);
                }
                Err(err) => {
                    tracing::warn!(error = %err, yielded = self.yielded, "undecodable stream entry; ending sequence");
                    self.finish();
                    return None;
                }
            }
        }
    }
}

impl<T, R> std::iter::FusedIterator for NdjsonSequence<T, R>
where
    T: DeserializeOwned,
    R: BufRead,
{
}
