//! Page Indexer CLI
//!
//! Local entry point for building page records from fetched pages on disk.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indexer::{
    config::{load_all, load_all_or_default},
    error::Result,
    pipeline::{PageAssembler, load_page, load_queue_item, run_batch},
    services::SystemClock,
};

/// Page Indexer - builds search records from crawled pages
#[derive(Parser, Debug)]
#[command(
    name = "indexer",
    version,
    about = "Extracts page records from crawled HTML"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the record for a single page
    Extract {
        /// Queue item JSON file
        #[arg(long)]
        item: PathBuf,

        /// Raw response body (default: item path with .html extension)
        #[arg(long)]
        body: Option<PathBuf>,
    },

    /// Build records for every page in a directory, one JSON line each
    Batch {
        /// Directory of <name>.json / <name>.html pairs
        #[arg(long)]
        dir: PathBuf,
    },

    /// Validate the configuration and sitemap
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Extract { item, body } => {
            let (config, sitemap) = load_all_or_default(&cli.config)?;
            let assembler = PageAssembler::new(&config, sitemap, SystemClock)?;
            let (queue_item, raw) = match body {
                Some(body_path) => (load_queue_item(&item)?, std::fs::read(body_path)?),
                None => load_page(&item)?,
            };

            let eligibility = assembler.check(&queue_item);
            match assembler.assemble(&queue_item, &raw) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => log::warn!("Skipped {}: {}", queue_item.url, eligibility),
            }
        }

        Command::Batch { dir } => {
            let (config, sitemap) = load_all_or_default(&cli.config)?;
            let assembler = PageAssembler::new(&config, sitemap, SystemClock)?;
            let outcome = run_batch(&assembler, &dir)?;
            for record in &outcome.records {
                println!("{}", serde_json::to_string(record)?);
            }
        }

        Command::Validate => {
            let (config, sitemap) = load_all(&cli.config)?;
            log::info!("✓ Config OK ({}, host: {})", cli.config.display(), config.crawler.host);
            log::info!(
                "✓ Region selectors OK (header: '{}', footer: '{}')",
                config.extraction.header_selector,
                config.extraction.footer_selector
            );
            log::info!("✓ Sitemap OK ({} paths)", sitemap.len());
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
