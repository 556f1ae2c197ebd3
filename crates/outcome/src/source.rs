//! Port trait for anything that produces outcomes.
//!
//! The outcome model does not know how entities are fetched. Transports (the
//! HTTP source, an in-process simulation) implement [`EntitySource`]; callers
//! only ever see the outcomes it returns.

use serde::de::DeserializeOwned;

use crate::{ManyOutcome, SingleOutcome};

/// A logical request: a path relative to the source's base plus ordered
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    path: String,
    query: Vec<(String, String)>,
}

impl Request {
    /// Creates a request for `path` with no query parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter. Order is preserved; repeated keys are kept.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Returns the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Producer of outcomes for single-entity and multi-entity calls.
///
/// ## Contract
///
/// - `fetch_one` returns exactly one of `Found`, `Empty`, `Failed`. Absence
///   must be `Empty`, never `Failed`.
/// - `fetch_many` returns `Stream` or `Failed`. The returned sequence yields
///   entities lazily and may end early if the producer fails mid-way; entities
///   already yielded stay valid.
/// - Neither method panics for remote or transport failures.
pub trait EntitySource {
    /// Looks up at most one entity.
    fn fetch_one<T>(&self, request: &Request) -> SingleOutcome<T>
    where
        T: DeserializeOwned;

    /// Queries zero or more entities.
    fn fetch_many<T>(&self, request: &Request) -> ManyOutcome<T>
    where
        T: DeserializeOwned + Send + 'static;
}
