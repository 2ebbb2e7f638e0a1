// src/services/sitemap.rs

//! Sitemap membership checks.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use url::Url;

use crate::error::{AppError, Result};

/// Answers whether a URL path is listed in the site's sitemap.
pub trait SitemapCheck {
    fn contains(&self, path: &str) -> bool;
}

impl<F> SitemapCheck for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, path: &str) -> bool {
        self(path)
    }
}

/// Set of paths read from a sitemap `urlset`.
#[derive(Debug, Clone, Default)]
pub struct SitemapIndex {
    paths: HashSet<String>,
}

impl SitemapIndex {
    /// Build an index from a sitemap XML document.
    ///
    /// Each `<url><loc>` is reduced to its path; locs that are not absolute
    /// URLs are stored as written.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let paths = parse_urlset(xml)?
            .into_iter()
            .map(|loc| match Url::parse(&loc) {
                Ok(url) => url.path().to_string(),
                Err(_) => loc,
            })
            .collect();
        Ok(Self { paths })
    }

    /// Read and parse a sitemap file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let xml = fs::read_to_string(path.as_ref())?;
        let index = Self::from_xml(&xml)?;
        log::info!(
            "Loaded {} sitemap paths from {}",
            index.len(),
            path.as_ref().display()
        );
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SitemapIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl SitemapCheck for SitemapIndex {
    fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Parse a urlset XML and return all <loc> values.
fn parse_urlset(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut locs = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;

    loop {
        match reader.read_event().map_err(AppError::sitemap)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => in_loc = true,
                _ => {}
            },
            Event::Text(e) if in_loc => {
                locs.push(e.unescape().map_err(AppError::sitemap)?.into_owned());
            }
            Event::CData(e) if in_loc => {
                locs.push(String::from_utf8_lossy(&e).into_owned());
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"loc" => in_loc = false,
                b"url" => in_url = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(locs)
}
