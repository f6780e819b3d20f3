//! Service layer: request builders and the seams they depend on.

mod count_service;
mod query;

pub use count_service::{CountService, Transport};
pub use query::{MatchAllQuery, Query, RawQuery};
