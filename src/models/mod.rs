// src/models/mod.rs

//! Domain models for the page indexer.
//!
//! Input queue items, the page records built from them, and configuration.

mod config;
mod page_record;
mod queue_item;

// Re-export all public types
pub use config::{Config, CrawlerConfig, ExtractionConfig, SitemapConfig};
pub(crate) use config::parse_selector;
pub use page_record::PageRecord;
pub use queue_item::{QueueItem, StateData};
