//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Crawl scope settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Content-area rules for the DOM extractors
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Sitemap membership source
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let host = self.crawler.host.trim();
        if host.is_empty() {
            return Err(AppError::validation("crawler.host is empty"));
        }
        if host.contains("://") || host.contains('/') {
            return Err(AppError::validation(format!(
                "crawler.host must be a bare host name, got '{}'",
                self.crawler.host
            )));
        }
        parse_selector(&self.extraction.header_selector)?;
        parse_selector(&self.extraction.footer_selector)?;
        Ok(())
    }
}

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, e))
}

/// Crawl scope settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Host a page must come from to be indexed
    #[serde(default = "defaults::host")]
    pub host: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
        }
    }
}

/// Region markers excluded from link and image extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Selector for the site header region
    #[serde(default = "defaults::header_selector")]
    pub header_selector: String,

    /// Selector for the site footer region
    #[serde(default = "defaults::footer_selector")]
    pub footer_selector: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_selector: defaults::header_selector(),
            footer_selector: defaults::footer_selector(),
        }
    }
}

/// Sitemap source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Path to a sitemap `urlset` XML file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

mod defaults {
    pub fn host() -> String {
        "www.consumerfinance.gov".into()
    }
    pub fn header_selector() -> String {
        ".o-header".into()
    }
    pub fn footer_selector() -> String {
        ".o-footer".into()
    }
}
