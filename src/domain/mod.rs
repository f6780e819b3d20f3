//! Domain layer: value objects and errors shared by every escount component.

pub mod errors;
pub mod models;

pub use errors::ClientError;
pub use models::{CountResult, FetchSourceContext, HttpRequest, HttpResponse, ShardsInfo};
