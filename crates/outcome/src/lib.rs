//! Outcome model for remote calls.
//!
//! A remote call ends in one of a closed set of variants. Single-entity
//! lookups produce a [`SingleOutcome`] (`Found`, `Empty`, `Failed`);
//! multi-entity queries produce a [`ManyOutcome`] (`Stream`, `Failed`) whose
//! entities arrive through a one-shot [`LazySequence`].
//!
//! Failure is a variant, not a control-flow event. The only fault this crate
//! raises is [`MissingValue`], from [`SingleOutcome::unwrap`] on an outcome
//! without a value.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies. It
//! defines the outcome types and the [`EntitySource`] trait; transport crates
//! decide how outcomes are produced.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`single`] | [`SingleOutcome`] and its accessors |
//! | [`many`] | [`ManyOutcome`] and its accessors |
//! | [`sequence`] | [`LazySequence`], the single-pass cursor |
//! | [`errors`] | [`ErrorDetail`] and [`MissingValue`] |
//! | [`identifiers`] | [`StatusCode`], [`CallId`] |
//! | [`source`] | [`Request`] and the [`EntitySource`] port |

pub mod errors;
pub mod identifiers;
pub mod many;
pub mod sequence;
pub mod single;
pub mod source;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{Cause, ErrorDetail, MissingValue};
pub use identifiers::{CallId, StatusCode};
pub use many::ManyOutcome;
pub use sequence::LazySequence;
pub use single::SingleOutcome;
pub use source::{EntitySource, Request};
