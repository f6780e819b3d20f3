use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::{dtos::CountRequestBody, services::Query},
    domain::{ClientError, CountResult, HttpRequest, HttpResponse},
    infrastructure::http_client::{check_response, expand_segment},
};

/// Contract for whatever actually moves bytes to the search engine.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}

/// Builder for `_count` requests.
///
/// Setters consume and return the builder; `execute` borrows it, so one
/// configured service can be run repeatedly and always re-sends the same
/// request.
#[derive(Clone)]
pub struct CountService {
    transport: Arc<dyn Transport>,
    indices: Vec<String>,
    types: Vec<String>,
    query: Option<Arc<dyn Query>>,
    debug: bool,
    pretty: bool,
}

impl CountService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            indices: Vec::new(),
            types: Vec::new(),
            query: None,
            debug: false,
            pretty: false,
        }
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.indices.push(index.into());
        self
    }

    pub fn indices(mut self, indices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.indices.extend(indices.into_iter().map(Into::into));
        self
    }

    pub fn type_(mut self, typ: impl Into<String>) -> Self {
        self.types.push(typ.into());
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Replaces any previously set query.
    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.query = Some(Arc::new(query));
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Assemble the wire request without sending it.
    pub fn build_request(&self) -> Result<HttpRequest, ClientError> {
        let indices = Self::expand_all(&self.indices)?;
        let types = Self::expand_all(&self.types)?;

        // An index segment is only written when indices were given, but a
        // type segment always sits behind one, even if that one is empty.
        let mut path = String::from("/");
        if !indices.is_empty() {
            path.push_str(&indices.join(","));
            path.push('/');
        }
        if !types.is_empty() {
            if indices.is_empty() {
                path.push('/');
            }
            path.push_str(&types.join(","));
            path.push('/');
        }
        path.push_str("_count");

        let mut request = HttpRequest::new("POST", path);
        if self.pretty {
            request.params.push(("pretty".into(), self.pretty.to_string()));
        }

        if let Some(query) = &self.query {
            let body = CountRequestBody {
                query: query.source(),
            };
            let payload = serde_json::to_string(&body)
                .map_err(|e| ClientError::request(format!("failed to encode query: {e}")))?;
            request.body = Some(payload);
        }

        Ok(request)
    }

    /// Send the request and return the number of matching documents.
    pub fn execute(&self) -> Result<i64, ClientError> {
        let request = self.build_request()?;

        if self.debug {
            info!(target: "escount::dump", "{}", request.dump());
        }

        let response = self.transport.send(&request)?;

        if self.debug {
            info!(target: "escount::dump", "{}", response.dump());
        }

        check_response(&response)?;

        let result: CountResult = serde_json::from_str(&response.body)
            .map_err(|e| ClientError::decode(format!("failed to parse count response: {e}")))?;

        debug!(
            path = %request.path,
            count = result.count,
            "count request completed"
        );

        Ok(result.count)
    }

    fn expand_all(names: &[String]) -> Result<Vec<String>, ClientError> {
        names.iter().map(|name| expand_segment(name)).collect()
    }
}
