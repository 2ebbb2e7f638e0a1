//! Service layer for the page indexer.
//!
//! This module contains the individual extractors:
//! - Atomic component inventory (`ComponentScanner`)
//! - Content links, images, meta tags and title (`ContentExtractor`)
//! - WordPress content detection (`has_wordpress_content`)
//! - Page fingerprint (`page_hash`)
//! - Sitemap membership (`SitemapCheck`, `SitemapIndex`)
//! - Record timestamps (`Clock`, `timestamp`)

mod components;
mod content;
mod hash;
mod legacy;
mod sitemap;
mod timestamp;

pub use components::{COMPONENT_PATTERN, ComponentScanner};
pub use content::ContentExtractor;
pub use hash::page_hash;
pub use legacy::{WORDPRESS_MARKER, has_wordpress_content};
pub use sitemap::{SitemapCheck, SitemapIndex};
pub use timestamp::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT, format_timestamp, timestamp};
