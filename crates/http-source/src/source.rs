//! [`HttpSource`]: the blocking HTTP transport.

use std::io::BufReader;

use outcome::{
    CallId, EntitySource, ErrorDetail, ManyOutcome, Request, SingleOutcome, StatusCode,
};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::Span;

use crate::response::{read_single, rejection_detail};
use crate::{ClientConfig, ClientError, NdjsonSequence};

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_NDJSON: &str = "application/x-ndjson";

/// Produces outcomes by issuing blocking HTTP GET requests.
///
/// Single lookups read and decode the whole JSON body before returning.
/// Multi-entity queries return as soon as the response head arrives; the body
/// is decoded line by line while the caller pulls from the sequence, and is
/// closed when the sequence is dropped.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Builds a source from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the settings are invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        tracing::debug!(
            base_url = %config.base_url,
            authenticated = config.token.is_some(),
            "http source ready"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &Request) -> String {
        let path = request.path();
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends the request; `Err` carries a detail for the transport failure.
    fn send(&self, request: &Request, accept: &'static str) -> Result<Response, ErrorDetail> {
        let url = self.url_for(request);
        self.client
            .get(&url)
            .query(request.query_pairs())
            .header(ACCEPT, accept)
            .send()
            .map_err(|err| {
                tracing::warn!(error = %err, "no response");
                ErrorDetail::with_cause(format!("no response from {url}"), err)
            })
    }
}

/// Reads a non-success response into a failure detail.
fn rejection(response: Response) -> (StatusCode, ErrorDetail) {
    let status = StatusCode::new(response.status().as_u16());
    let reason = response.status().canonical_reason();
    let error = rejection_detail(status, reason, response.text());
    tracing::warn!(status = status.as_u16(), error = %error, "request rejected");
    (status, error)
}

fn call_span(call_id: CallId, kind: &'static str, request: &Request) -> Span {
    tracing::info_span!("fetch", %call_id, kind, request = %request)
}

impl EntitySource for HttpSource {
    fn fetch_one<T>(&self, request: &Request) -> SingleOutcome<T>
    where
        T: DeserializeOwned,
    {
        let span = call_span(CallId::new_random(), "one", request);
        let _entered = span.enter();

        let response = match self.send(request, APPLICATION_JSON) {
            Ok(response) => response,
            Err(error) => return SingleOutcome::failed(StatusCode::TRANSPORT, error),
        };

        if !response.status().is_success() {
            let (status, error) = rejection(response);
            return SingleOutcome::failed(status, error);
        }

        let status = StatusCode::new(response.status().as_u16());
        let outcome = read_single(status, response.text());

        match &outcome {
            SingleOutcome::Found(_) => tracing::debug!("found"),
            SingleOutcome::Empty => tracing::debug!("empty"),
            SingleOutcome::Failed { status, error } => {
                tracing::warn!(status = status.as_u16(), error = %error, "lookup failed");
            }
        }
        outcome
    }

    fn fetch_many<T>(&self, request: &Request) -> ManyOutcome<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let span = call_span(CallId::new_random(), "many", request);
        let _entered = span.enter();

        let response = match self.send(request, APPLICATION_NDJSON) {
            Ok(response) => response,
            Err(error) => return ManyOutcome::failed(StatusCode::TRANSPORT, error),
        };

        if !response.status().is_success() {
            let (status, error) = rejection(response);
            return ManyOutcome::failed(status, error);
        }

        tracing::debug!(status = response.status().as_u16(), "streaming");
        let sequence: NdjsonSequence<T, _> =
            NdjsonSequence::new(BufReader::new(response), span.clone());
        ManyOutcome::stream(sequence)
    }
}
