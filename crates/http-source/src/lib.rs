//! Blocking HTTP transport for the outcome model.
//!
//! Implements [`outcome::EntitySource`] over plain HTTP GET requests:
//!
//! - `fetch_one` asks for `application/json` and maps the response onto
//!   `Found` / `Empty` / `Failed`.
//! - `fetch_many` asks for `application/x-ndjson` and hands back a
//!   `Stream` that decodes one entity per line as the caller pulls.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Request building, authentication, timeouts, response
//! decoding and status mapping live here. The [`outcome`] crate sees only
//! [`outcome::EntitySource`].
//!
//! ## Status mapping
//!
//! | Response | Single lookup | Multi-entity query |
//! |----------|---------------|--------------------|
//! | 2xx, entity body | `Found` | `Stream` |
//! | 204, empty body, `null` | `Empty` | `Stream` (ends immediately) |
//! | 2xx, undecodable body | `Failed(status)` | `Stream` ends at the bad line |
//! | 4xx / 5xx | `Failed(status)` | `Failed(status)` |
//! | no response | `Failed(0)` | `Failed(0)` |

pub mod config;
pub mod errors;
pub mod ndjson;
mod response;
pub mod source;

pub use config::ClientConfig;
pub use errors::ClientError;
pub use ndjson::NdjsonSequence;
pub use source::HttpSource;
