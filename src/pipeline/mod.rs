//! Pipeline entry points for page indexing.
//!
//! - `PageAssembler`: Gate and assemble one fetched page
//! - `run_batch`: Assemble every page stored in a directory

pub mod assemble;
pub mod batch;

pub use assemble::{Eligibility, HTML_CONTENT_TYPE, PageAssembler};
pub use batch::{BatchOutcome, load_page, load_queue_item, run_batch};
