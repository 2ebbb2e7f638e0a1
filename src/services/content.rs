// src/services/content.rs

//! DOM extractors for links, images, meta tags and the title.
//!
//! Links and images come from the content area only: anything inside the
//! site header or footer region is skipped while walking the parsed tree.
//! The tree itself is never modified, so meta tags and the title always see
//! the whole document regardless of extraction order.

use std::fmt::Write;

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{ExtractionConfig, parse_selector};

/// Extracts page content from a parsed document.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    anchors: Selector,
    images: Selector,
    metas: Selector,
    title: Selector,
    header: Selector,
    footer: Selector,
}

impl ContentExtractor {
    /// Compile the selectors for the configured header and footer regions.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            anchors: parse_selector("body a")?,
            images: parse_selector("body img")?,
            metas: parse_selector("meta")?,
            title: parse_selector("title")?,
            header: parse_selector(&config.header_selector)?,
            footer: parse_selector(&config.footer_selector)?,
        })
    }

    /// `href` of every content-area anchor, in document order.
    pub fn links(&self, document: &Html) -> Vec<String> {
        let links = self.content_attrs(document, &self.anchors, "href");
        log::debug!("Found {} content links", links.len());
        links
    }

    /// `src` of every content-area image, in document order.
    pub fn images(&self, document: &Html) -> Vec<String> {
        let images = self.content_attrs(document, &self.images, "src");
        log::debug!("Found {} content images", images.len());
        images
    }

    /// Rebuild each `<meta>` element as `<meta a="x" b="y">`.
    ///
    /// Attributes keep their source order. Values are the parsed values
    /// wrapped in double quotes; no escaping is applied.
    pub fn meta_tags(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.metas)
            .map(|meta| {
                let mut tag = String::from("<meta");
                for (name, value) in meta.value().attrs() {
                    let _ = write!(tag, " {}=\"{}\"", name, value);
                }
                tag.push('>');
                tag
            })
            .collect()
    }

    /// Text of the first `<title>`, verbatim. Empty when there is none.
    pub fn title(&self, document: &Html) -> String {
        document
            .select(&self.title)
            .next()
            .map(|title| title.text().collect())
            .unwrap_or_default()
    }

    /// Values of `attr` on matches of `selector` outside header/footer regions.
    /// Elements without the attribute are skipped. Duplicates are kept.
    fn content_attrs(&self, document: &Html, selector: &Selector, attr: &str) -> Vec<String> {
        document
            .select(selector)
            .filter(|el| !self.in_chrome(el))
            .filter_map(|el| el.value().attr(attr))
            .map(|value| value.to_string())
            .collect()
    }

    /// Whether the element or one of its ancestors below `<body>` is a
    /// header or footer region.
    fn in_chrome(&self, element: &ElementRef) -> bool {
        std::iter::once(*element)
            .chain(element.ancestors().filter_map(ElementRef::wrap))
            .take_while(|el| el.value().name() != "body")
            .any(|el| self.header.matches(&el) || self.footer.matches(&el))
    }
}
