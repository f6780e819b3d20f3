use serde_json::{json, Value};

/// Anything that can render itself as query DSL.
pub trait Query: Send + Sync {
    fn source(&self) -> Value;
}

impl Query for Value {
    fn source(&self) -> Value {
        self.clone()
    }
}

/// Query DSL that was built elsewhere, e.g. parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuery(pub Value);

impl RawQuery {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }
}

impl Query for RawQuery {
    fn source(&self) -> Value {
        self.0.clone()
    }
}

/// Matches every document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAllQuery;

impl Query for MatchAllQuery {
    fn source(&self) -> Value {
        json!({ "match_all": {} })
    }
}
