// src/pipeline/assemble.rs

//! Page record assembly.
//!
//! Decides whether a fetched page is in scope and, if so, runs every
//! extractor once and merges the results onto a copy of the queue item.

use std::fmt;

use scraper::Html;

use crate::error::Result;
use crate::models::{Config, PageRecord, QueueItem};
use crate::services::{
    Clock, ComponentScanner, ContentExtractor, SitemapCheck, SystemClock, has_wordpress_content,
    page_hash, timestamp,
};

/// MIME type a page must carry to be indexed.
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Outcome of the eligibility gate for one queue item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// HTML served by the target host
    Eligible,
    /// Response is not HTML
    NotHtml { content_type: String },
    /// Page lives on another host
    ForeignHost { host: String },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Eligible => write!(f, "eligible"),
            Eligibility::NotHtml { content_type } if content_type.is_empty() => {
                write!(f, "no content type")
            }
            Eligibility::NotHtml { content_type } => {
                write!(f, "content type '{}' is not HTML", content_type)
            }
            Eligibility::ForeignHost { host } => write!(f, "host '{}' is out of scope", host),
        }
    }
}

/// Builds page records for one crawl target.
pub struct PageAssembler<S, C = SystemClock> {
    host: String,
    content: ContentExtractor,
    components: ComponentScanner,
    sitemap: S,
    clock: C,
}

impl<S: SitemapCheck, C: Clock> PageAssembler<S, C> {
    /// Create an assembler for `config.crawler.host`.
    ///
    /// Compiles the region selectors and the component pattern up front so
    /// that assembling a page cannot fail.
    pub fn new(config: &Config, sitemap: S, clock: C) -> Result<Self> {
        Ok(Self {
            host: config.crawler.host.clone(),
            content: ContentExtractor::new(&config.extraction)?,
            components: ComponentScanner::new()?,
            sitemap,
            clock,
        })
    }

    /// Apply the eligibility gate.
    pub fn check(&self, item: &QueueItem) -> Eligibility {
        let content_type = item.content_type();
        if !content_type.contains(HTML_CONTENT_TYPE) {
            return Eligibility::NotHtml {
                content_type: content_type.to_string(),
            };
        }
        if item.host != self.host {
            return Eligibility::ForeignHost {
                host: item.host.clone(),
            };
        }
        Eligibility::Eligible
    }

    /// Build the page record, or `None` if the page is out of scope.
    pub fn assemble(&self, item: &QueueItem, body: &[u8]) -> Option<PageRecord> {
        let eligibility = self.check(item);
        if !eligibility.is_eligible() {
            log::debug!("Skipping {}: {}", item.url, eligibility);
            return None;
        }

        let document = Html::parse_document(&String::from_utf8_lossy(body));

        let record = PageRecord {
            item: PageRecord::base_item(item),
            components: self.components.scan(body),
            has_wordpress_content: has_wordpress_content(body),
            content_links: self.content.links(&document),
            content_images: self.content.images(&document),
            meta_tags: self.content.meta_tags(&document),
            title: self.content.title(&document),
            page_hash: page_hash(body),
            sitemap: self.sitemap.contains(&item.path).to_string(),
            timestamp: timestamp(&self.clock),
        };

        log::debug!(
            "Indexed {}: {} links, {} images, {} components",
            item.url,
            record.content_links.len(),
            record.content_images.len(),
            record.components.len()
        );
        Some(record)
    }
}
