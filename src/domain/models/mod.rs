mod count;
mod fetch_source;
mod http;

pub use count::{CountResult, ShardsInfo};
pub use fetch_source::FetchSourceContext;
pub use http::{HttpRequest, HttpResponse};
