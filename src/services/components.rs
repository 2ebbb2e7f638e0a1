//! Atomic design component inventory.
//!
//! Scans the serialized markup for class-style tokens prefixed with `a-`
//! (atom), `m-` (molecule) or `o-` (organism). The scan runs over the raw
//! text rather than the parsed tree so tokens inside attribute values,
//! inline scripts and styles are counted exactly as they appear.

use std::collections::HashSet;

use regex::Regex;

use crate::error::Result;

/// Token grammar: a `class="` or whitespace lead-in, then the prefix letter,
/// a hyphen, and a name that ends at the first underscore, double quote or
/// whitespace. BEM elements like `m-list__item` therefore report `m-list`.
pub const COMPONENT_PATTERN: &str = r#"(?:class="|\s)([oma]-[^_"\s]*)"#;

/// Finds atomic component names in a page body.
#[derive(Debug, Clone)]
pub struct ComponentScanner {
    pattern: Regex,
}

impl ComponentScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(COMPONENT_PATTERN)?,
        })
    }

    /// Unique component names in first-seen order.
    pub fn scan(&self, body: &[u8]) -> Vec<String> {
        let html = String::from_utf8_lossy(body);
        let mut seen = HashSet::new();
        let mut components = Vec::new();

        for caps in self.pattern.captures_iter(&html) {
            let Some(name) = caps.get(1) else { continue };
            if seen.insert(name.as_str()) {
                components.push(name.as_str().to_string());
            }
        }

        log::debug!("Found {} atomic components", components.len());
        components
    }
}
