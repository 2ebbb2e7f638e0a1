// src/pipeline/batch.rs

//! Batch assembly over a directory of fetched pages.
//!
//! Each page is a pair of files sharing a stem: `<name>.json` holds the
//! queue item and `<name>.html` the raw response body.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{PageRecord, QueueItem};
use crate::services::{Clock, SitemapCheck};

use super::assemble::PageAssembler;

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<PageRecord>,
    pub page_total: usize,
    pub skipped: usize,
    pub failures: usize,
}

/// Assemble every page found in `dir`, in file name order.
///
/// Pages that cannot be read are logged and counted; only a failure to list
/// the directory aborts the run.
pub fn run_batch<S: SitemapCheck, C: Clock>(
    assembler: &PageAssembler<S, C>,
    dir: &Path,
) -> Result<BatchOutcome> {
    let items = list_queue_items(dir)?;
    let mut outcome = BatchOutcome {
        page_total: items.len(),
        ..BatchOutcome::default()
    };

    for item_path in items {
        match load_page(&item_path) {
            Ok((item, body)) => match assembler.assemble(&item, &body) {
                Some(record) => outcome.records.push(record),
                None => outcome.skipped += 1,
            },
            Err(error) => {
                outcome.failures += 1;
                log::warn!("Failed to load page {}: {}", item_path.display(), error);
            }
        }
    }

    log::info!(
        "Batch complete: {} records, {} skipped, {} failed of {} pages",
        outcome.records.len(),
        outcome.skipped,
        outcome.failures,
        outcome.page_total
    );
    Ok(outcome)
}

/// Queue item files in `dir`, sorted by path.
fn list_queue_items(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::config(format!(
            "Page directory not found: {}",
            dir.display()
        )));
    }

    let mut items = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            items.push(path);
        }
    }
    items.sort();
    Ok(items)
}

/// Read a queue item from a JSON file.
pub fn load_queue_item(item_path: &Path) -> Result<QueueItem> {
    Ok(serde_json::from_slice(&fs::read(item_path)?)?)
}

/// Read a queue item and its sibling body file.
pub fn load_page(item_path: &Path) -> Result<(QueueItem, Vec<u8>)> {
    let item = load_queue_item(item_path)?;
    let body = fs::read(item_path.with_extension("html"))?;
    Ok((item, body))
}
