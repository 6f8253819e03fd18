//! Command-line interface definitions for cardfeed.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every flag has a default that reproduces the stock behavior, so running
//! the binary with no arguments scrapes `urls.txt` into `feed.xml`.

use clap::Parser;

/// Command-line arguments for the cardfeed scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape the default urls.txt into feed.xml
/// cardfeed
///
/// # Custom source list and output path
/// cardfeed -u sources.txt -o out/feed.xml
///
/// # Site-specific selectors, listing data only
/// cardfeed -s selectors.yaml --no-details
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the newline-delimited list of listing-page URLs
    #[arg(short, long, default_value = "urls.txt")]
    pub urls: String,

    /// Path the RSS feed is written to
    #[arg(short, long, default_value = "feed.xml")]
    pub output: String,

    /// Optional YAML file overriding the built-in CSS selectors
    #[arg(short, long)]
    pub selectors: Option<String>,

    /// Channel title of the generated feed
    #[arg(long, default_value = "News feed")]
    pub feed_title: String,

    /// Channel description of the generated feed
    #[arg(long, default_value = "Articles aggregated from scraped listing pages")]
    pub feed_description: String,

    /// Skip per-article detail fetches and use listing data only
    #[arg(long)]
    pub no_details: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(&["cardfeed"]);

        assert_eq!(cli.urls, "urls.txt");
        assert_eq!(cli.output, "feed.xml");
        assert_eq!(cli.selectors, None);
        assert_eq!(cli.feed_title, "News feed");
        assert_eq!(
            cli.feed_description,
            "Articles aggregated from scraped listing pages"
        );
        assert!(!cli.no_details);
        assert_eq!(cli.timeout_secs, 10);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&[
            "cardfeed",
            "-u",
            "sources.txt",
            "-o",
            "/tmp/feed.xml",
            "-s",
            "selectors.yaml",
        ]);

        assert_eq!(cli.urls, "sources.txt");
        assert_eq!(cli.output, "/tmp/feed.xml");
        assert_eq!(cli.selectors.as_deref(), Some("selectors.yaml"));
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from(&[
            "cardfeed",
            "--feed-title",
            "Patch notes",
            "--no-details",
            "--timeout-secs",
            "30",
        ]);

        assert_eq!(cli.feed_title, "Patch notes");
        assert!(cli.no_details);
        assert_eq!(cli.timeout_secs, 30);
    }
}
