//! Error types for the scraping pipeline and its configuration.
//!
//! Selector misses and unparsable dates are not errors anywhere in this
//! crate: field lookups return `Option` or a default and the date parser
//! falls back to the current time. The variants below cover the two things
//! that can actually fail: talking to the network and loading the selector
//! configuration.

use thiserror::Error;

/// Failure while fetching a listing or detail page.
///
/// Listing-level failures skip the whole source URL; detail-level failures
/// are converted by the enricher into a degraded card built from listing
/// data alone. Neither aborts the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The source URL itself could not be parsed.
    #[error("invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP request failed: connection error, timeout, or a non-2xx
    /// status (mapped through `error_for_status`).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failure while loading or compiling the selector configuration.
///
/// These are the only startup-fatal errors besides an unreadable URL list.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read selector config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse selector config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configured CSS selector did not compile.
    #[error("invalid CSS selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}
