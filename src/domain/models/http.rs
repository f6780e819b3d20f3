/// A request ready to be handed to a transport. `path` is already
/// percent-encoded; `params` are encoded when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn path_and_query(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }

        let query = self
            .params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }

    /// Text rendering used for debug dumps.
    pub fn dump(&self) -> String {
        let mut out = format!("{} {} HTTP/1.1", self.method, self.path_and_query());
        if let Some(body) = &self.body {
            out.push_str("\nContent-Type: application/json\n\n");
            out.push_str(body);
        }
        out
    }
}

/// Status and raw body of a transport round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn dump(&self) -> String {
        format!("HTTP/1.1 {}\n\n{}", self.status, self.body)
    }
}
