use serde::Serialize;
use serde_json::Value;

/// JSON body of a `_count` request carrying a query.
#[derive(Debug, Clone, Serialize)]
pub struct CountRequestBody {
    pub query: Value,
}
