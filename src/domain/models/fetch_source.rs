use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Describes whether, and which parts of, a document's `_source` should be
/// returned when the document is retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSourceContext {
    fetch_source: bool,
    transform_source: bool,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(fetch_source: bool) -> Self {
        Self {
            fetch_source,
            transform_source: false,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    pub fn fetch_source(&self) -> bool {
        self.fetch_source
    }

    pub fn set_fetch_source(&mut self, fetch_source: bool) {
        self.fetch_source = fetch_source;
    }

    /// Append field patterns to the include list. Order and duplicates are kept.
    pub fn include(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.includes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append field patterns to the exclude list. Order and duplicates are kept.
    pub fn exclude(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Stored for whoever consumes the context; `source` never reads it.
    pub fn transform_source(mut self, transform_source: bool) -> Self {
        self.transform_source = transform_source;
        self
    }

    pub fn is_transform_source(&self) -> bool {
        self.transform_source
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// JSON projection used in request bodies: `false` when source fetching is
    /// disabled, otherwise an object carrying both lists (possibly empty).
    pub fn source(&self) -> Value {
        if !self.fetch_source {
            return Value::Bool(false);
        }
        json!({
            "includes": self.includes,
            "excludes": self.excludes,
        })
    }
}

impl Default for FetchSourceContext {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Serialize for FetchSourceContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source().serialize(serializer)
    }
}
