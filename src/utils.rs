//! Utility functions for text cleanup and reading the source URL list.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use tokio::fs;
use tracing::debug;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize text scraped from HTML nodes.
///
/// Element text arrives as fragments split across nested tags, each with
/// its own surrounding whitespace. This trims the ends and collapses every
/// internal whitespace run (including newlines) to a single space.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  Patch\n   14.2   notes "), "Patch 14.2 notes");
/// ```
pub fn clean_text(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").to_string()
}

/// Read the newline-delimited list of source listing-page URLs.
///
/// Blank (whitespace-only) lines are ignored; everything else is taken
/// verbatim after trimming.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn read_source_list(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path).await?;
    let urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!(count = urls.len(), path, "Read source URL list");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_trims_and_collapses() {
        assert_eq!(clean_text("  Patch\n   14.2   notes "), "Patch 14.2 notes");
        assert_eq!(clean_text("\t\n"), "");
        assert_eq!(clean_text("already clean"), "already clean");
    }

    #[test]
    fn test_clean_text_collapses_inner_newlines() {
        assert_eq!(clean_text("one\ntwo\n\n  three"), "one two three");
    }

    #[tokio::test]
    async fn test_read_source_list_skips_blank_lines() {
        let path = std::env::temp_dir().join("cardfeed_test_sources.txt");
        std::fs::write(
            &path,
            "https://example.com/news\n\n   \nhttps://example.com/patch-notes\n",
        )
        .unwrap();

        let urls = read_source_list(path.to_str().unwrap()).await.unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com/news".to_string(),
                "https://example.com/patch-notes".to_string(),
            ]
        );

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_read_source_list_missing_file() {
        let result = read_source_list("/nonexistent/cardfeed_urls.txt").await;
        assert!(result.is_err());
    }
}
