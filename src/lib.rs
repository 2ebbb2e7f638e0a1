// src/lib.rs

//! Page Indexer Library
//!
//! Turns one fetched page (crawl queue item plus raw body) into a
//! [`PageRecord`] for the search index.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;

pub use models::{PageRecord, QueueItem};
pub use pipeline::{Eligibility, PageAssembler};
