//! Crawl queue item supplied by the crawl engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for one fetched URL.
///
/// Only the fields the indexer reads are typed; everything else the crawl
/// engine attached is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    /// Full URL of the page
    pub url: String,

    /// Host component of the URL
    pub host: String,

    /// Path component of the URL
    pub path: String,

    /// Response state recorded after the fetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_data: Option<StateData>,

    /// Remaining queue item fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueueItem {
    /// Create a queue item with the fields the indexer needs.
    pub fn new(url: impl Into<String>, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            host: host.into(),
            path: path.into(),
            state_data: None,
            extra: Map::new(),
        }
    }

    /// Attach a response content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.state_data
            .get_or_insert_with(StateData::default)
            .content_type = Some(content_type.into());
        self
    }

    /// Response MIME type, or an empty string when none was recorded.
    pub fn content_type(&self) -> &str {
        self.state_data
            .as_ref()
            .and_then(|s| s.content_type.as_deref())
            .unwrap_or("")
    }
}

/// Response state attached to a queue item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    /// MIME type from the `Content-Type` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
