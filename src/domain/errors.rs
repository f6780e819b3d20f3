use thiserror::Error;

/// Failures surfaced while building, sending, or decoding a request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A path variable could not be expanded into a URL segment.
    #[error("template error: {0}")]
    Template(String),

    /// The request (usually its JSON body) could not be constructed.
    #[error("request error: {0}")]
    Request(String),

    /// Connection, timeout, or I/O failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Client configuration could not be read or written.
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code when the failure came from the server.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
