//! Blocking transport that sends prepared requests with ureq.

use std::time::Duration;

use tracing::debug;

use crate::application::services::Transport;
use crate::domain::{ClientError, HttpRequest, HttpResponse};
use crate::settings::ClientConfig;

use super::handle_http_error;

/// Transport bound to one search engine base URL.
pub struct UreqTransport {
    base_url: String,
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path (which already starts with `/`)
    fn url(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let url = self.url(request);
        debug!(method = %request.method, %url, "sending request");

        let call = self.agent.request(&request.method, &url);
        let result = match &request.body {
            Some(body) => call
                .set("Content-Type", "application/json")
                .send_string(body),
            None => call.call(),
        };

        match result {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string().map_err(|e| {
                    ClientError::transport(format!("failed to read response body: {e}"))
                })?;
                Ok(HttpResponse::new(status, body))
            }
            Err(error) => handle_http_error(error),
        }
    }
}
