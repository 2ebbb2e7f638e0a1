//! Page record data structure.

use serde::{Deserialize, Serialize};

use super::QueueItem;

/// An indexed page: the queue item plus everything extracted from its body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Queue item fields, serialized inline
    #[serde(flatten)]
    pub item: QueueItem,

    /// Atomic component names in first-seen order
    pub components: Vec<String>,

    /// Whether the body references `wp-content`
    #[serde(rename = "hasWordPressContent")]
    pub has_wordpress_content: bool,

    /// `href` values from the content area
    pub content_links: Vec<String>,

    /// `src` values from the content area
    pub content_images: Vec<String>,

    /// Rebuilt `<meta>` tags
    pub meta_tags: Vec<String>,

    /// Document title, empty when absent
    pub title: String,

    /// Fingerprint of the raw body
    pub page_hash: String,

    /// `"true"` or `"false"`
    pub sitemap: String,

    /// Local creation time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl PageRecord {
    /// JSON names of the fields a record adds on top of its queue item.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "components",
        "hasWordPressContent",
        "contentLinks",
        "contentImages",
        "metaTags",
        "title",
        "pageHash",
        "sitemap",
        "timestamp",
    ];

    /// Copy of `item` to build a record on.
    ///
    /// Extra queue item fields named like a record field are dropped so the
    /// extracted values replace them.
    pub fn base_item(item: &QueueItem) -> QueueItem {
        let mut base = item.clone();
        for name in Self::FIELD_NAMES {
            base.extra.remove(name);
        }
        base
    }
}
