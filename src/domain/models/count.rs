use serde::{Deserialize, Serialize};

/// Body returned by the `_count` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub count: i64,
    #[serde(rename = "_shards", default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<ShardsInfo>,
}

/// How many shards took part in a request and how they fared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardsInfo {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub successful: i64,
    #[serde(default)]
    pub failed: i64,
}
