//! HTTP plumbing shared by every request builder.
//!
//! Holds the ureq-backed transport plus the two small collaborators a
//! builder needs around it: expanding a path variable into a safe URL
//! segment, and turning an error status into a `ClientError`.

mod transport;

pub use transport::UreqTransport;

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{ClientError, HttpResponse};

/// Default search engine endpoint
pub const DEFAULT_URL: &str = "http://127.0.0.1:9200";

/// Error envelope returned by the search engine on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Value,
}

impl ErrorResponse {
    fn reason(&self) -> Option<String> {
        match &self.error {
            Value::String(reason) => Some(reason.clone()),
            Value::Object(map) => map
                .get("reason")
                .and_then(Value::as_str)
                .or_else(|| map.get("type").and_then(Value::as_str))
                .map(String::from),
            _ => None,
        }
    }
}

/// Expand a single `{name}` path variable. The value always stays one
/// segment: reserved characters such as `/` or `,` are percent-encoded.
/// An empty value expands to an empty segment.
pub fn expand_segment(value: &str) -> Result<String, ClientError> {
    Ok(urlencoding::encode(value).into_owned())
}

/// Fail unless the response carries a 2xx status.
pub fn check_response(response: &HttpResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }

    let reason = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|envelope| envelope.reason())
        .unwrap_or_else(|| {
            let body = response.body.trim();
            if body.is_empty() {
                "no response body".to_string()
            } else {
                body.to_string()
            }
        });

    Err(ClientError::status(response.status, reason))
}

/// Upper bound for the availability probe, independent of the request timeout.
pub const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(2);

/// Check whether a search engine answers at `base_url`.
pub fn check_availability(base_url: &str) -> bool {
    let url = format!("{}/", base_url.trim_end_matches('/'));

    debug!(%url, "checking search engine availability");

    match ureq::get(&url).timeout(AVAILABILITY_TIMEOUT).call() {
        Ok(response) => {
            let status = response.status();
            debug!(status, "search engine responded");
            (200..300).contains(&status)
        }
        Err(e) => {
            warn!(%url, error = %e, "search engine is not reachable");
            false
        }
    }
}

/// Convert ureq failures into client errors, keeping the server's reason.
pub(crate) fn handle_http_error(error: ureq::Error) -> Result<HttpResponse, ClientError> {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().map_err(|e| {
                ClientError::transport(format!("failed to read error response body: {e}"))
            })?;
            Ok(HttpResponse::new(code, body))
        }
        ureq::Error::Transport(transport) => Err(ClientError::transport(transport.to_string())),
    }
}
