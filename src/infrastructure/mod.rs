//! Infrastructure layer wiring concrete adapters (HTTP transport, validation).

pub mod http_client;

pub use http_client::{check_availability, check_response, expand_segment, UreqTransport};
