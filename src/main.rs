//! # cardfeed
//!
//! A batch scraper that turns HTML listing pages into an RSS 2.0 feed.
//! Each run reads a list of listing-page URLs, extracts the article cards
//! from every page, optionally enriches each article from its detail
//! page, and writes the aggregate to a single `feed.xml`.
//!
//! ## Usage
//!
//! ```sh
//! cardfeed -u urls.txt -o feed.xml
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Download each configured listing page
//! 2. **Extraction**: Select article cards and their sub-elements via CSS selectors
//! 3. **Enrichment**: Fetch each article page for a better description and image
//! 4. **Normalization**: Clean titles, reformat dates, derive stable guids
//! 5. **Output**: Serialize everything as one RSS 2.0 document
//!
//! Sources are processed strictly in file order and articles keep the
//! order of their cards, so the feed is reproducible for a given set of
//! pages. A failing source or article page is logged and skipped; only an
//! unreadable URL list, bad selector config, or unwritable output aborts
//! the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod normalize;
mod outputs;
mod scrape;
mod utils;

use cli::Cli;
use config::SelectorConfig;
use models::Feed;
use outputs::rss;
use utils::read_source_list;

/// Channel link advertised in the generated feed.
const FEED_LINK: &str = "http://localhost/";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("cardfeed starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.urls, ?args.output, "Parsed CLI arguments");

    // ---- Selector config ----
    let selector_config = match args.selectors.as_deref() {
        Some(path) => {
            let config = SelectorConfig::load(path).await?;
            info!(path, "Loaded selector overrides");
            config
        }
        None => SelectorConfig::default(),
    };
    let selectors = selector_config.compile()?;

    let client = fetch::build_client(args.timeout_secs)?;

    // ---- Read the source list ----
    let sources = read_source_list(&args.urls).await?;
    if sources.is_empty() {
        warn!(path = %args.urls, "Source list is empty; nothing to scrape");
        return Ok(());
    }
    info!(count = sources.len(), path = %args.urls, "Loaded source URLs");

    // ---- Scrape each source in order ----
    let fetch_details = !args.no_details;
    let mut articles = Vec::new();
    for url in &sources {
        info!(%url, "Scraping listing page");
        match scrape::scrape_source(&client, url, &selectors, fetch_details).await {
            Ok(mut scraped) => {
                info!(%url, count = scraped.len(), "Scraped listing page");
                articles.append(&mut scraped);
            }
            Err(e) => {
                error!(%url, error = %e, "Failed to scrape listing page; continuing");
            }
        }
    }

    // ---- Build and write the feed ----
    let feed = Feed {
        title: args.feed_title,
        link: FEED_LINK.to_string(),
        description: args.feed_description,
        articles,
    };
    if !rss::write_feed_if_any(&feed, &args.output).await? {
        warn!("No articles were scraped; the configured selectors may no longer match the pages");
        return Ok(());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        count = feed.articles.len(),
        "Execution complete"
    );

    Ok(())
}
