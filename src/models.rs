//! Data models for scraped cards and the articles built from them.
//!
//! Three shapes move through the pipeline:
//! - [`RawCard`]: what a listing page says about one article
//! - [`EnrichedCard`]: a raw card merged with optional detail-page results
//! - [`Article`]: the canonical, feed-ready record
//!
//! Raw and enriched cards are transient: they are created and consumed
//! while processing a single source URL. Only [`Article`] crosses page
//! boundaries, accumulated into a [`Feed`] that is serialized once per run.

use url::Url;

/// One article card as scraped from a listing page.
///
/// Every field is best-effort: a missing sub-element leaves the
/// corresponding field empty or `None`, never an error. The `href` has
/// already been resolved against the listing page's base URL where
/// possible, but is not guaranteed to be absolute (the anchor may have
/// carried no usable destination at all).
#[derive(Debug, Clone)]
pub struct RawCard {
    /// Cleaned text of the title sub-element; empty if missing.
    pub title: String,
    /// Cleaned text of the description sub-element; empty if missing.
    /// Used as the article description whenever detail enrichment is
    /// skipped or comes back empty-handed.
    pub description: String,
    /// The card anchor's destination after base-URL resolution.
    pub href: String,
    /// The `datetime` attribute of the card's time element, verbatim;
    /// empty if absent.
    pub raw_date: String,
    /// Resolved `src` of the card's image sub-element, if any.
    pub thumbnail: Option<String>,
}

impl RawCard {
    /// The card's link as an absolute URL, or `None` when the href is
    /// empty, relative, or has no host. Cards without an absolute link
    /// cannot become articles and are dropped by the pipeline.
    pub fn absolute_link(&self) -> Option<Url> {
        Url::parse(&self.href)
            .ok()
            .filter(|url| url.host_str().is_some())
    }
}

/// A [`RawCard`] plus whatever the detail page contributed.
#[derive(Debug, Clone)]
pub struct EnrichedCard {
    pub card: RawCard,
    /// Detail-page summary paragraph when found, otherwise the listing
    /// description (which may be empty).
    pub description: String,
    /// Detail-page image when found, otherwise the listing thumbnail.
    pub image_url: Option<String>,
}

impl EnrichedCard {
    /// Build an enriched card from listing data alone.
    ///
    /// This is the degraded form used when detail fetching is disabled,
    /// the card has no absolute link, or the detail fetch failed.
    pub fn from_listing(card: RawCard) -> Self {
        let description = card.description.clone();
        let image_url = card.thumbnail.clone();
        Self {
            card,
            description,
            image_url,
        }
    }
}

/// A canonical article, immutable once built.
#[derive(Debug, Clone)]
pub struct Article {
    /// Non-empty; a placeholder when the source had no title.
    pub title: String,
    /// Absolute URL, scheme and host present.
    pub link: String,
    /// May be the empty string.
    pub description: String,
    /// Fixed-format timestamp, e.g. `Sat, 01 Jan 2000 00:00:00 GMT`.
    pub published_at: String,
    /// Lowercase hex MD5 of `link`; 32 characters, deterministic.
    pub guid: String,
    pub image_url: Option<String>,
}

/// Channel metadata plus the ordered article list for one run.
#[derive(Debug)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(href: &str) -> RawCard {
        RawCard {
            title: "Patch 14.2 notes".to_string(),
            description: "Balance changes".to_string(),
            href: href.to_string(),
            raw_date: "2024-01-16T18:00:00.000000Z".to_string(),
            thumbnail: Some("https://cdn.example.com/thumb.jpg".to_string()),
        }
    }

    #[test]
    fn test_absolute_link_accepts_http_url() {
        let c = card("https://example.com/news/patch-14-2");
        let link = c.absolute_link().unwrap();
        assert_eq!(link.host_str(), Some("example.com"));
        assert_eq!(link.path(), "/news/patch-14-2");
    }

    #[test]
    fn test_absolute_link_rejects_empty_and_relative() {
        assert!(card("").absolute_link().is_none());
        assert!(card("/news/patch-14-2").absolute_link().is_none());
        assert!(card("news/patch-14-2").absolute_link().is_none());
    }

    #[test]
    fn test_absolute_link_rejects_hostless_scheme() {
        assert!(card("mailto:news@example.com").absolute_link().is_none());
    }

    #[test]
    fn test_from_listing_carries_description_and_thumbnail() {
        let enriched = EnrichedCard::from_listing(card("https://example.com/a"));
        assert_eq!(enriched.description, "Balance changes");
        assert_eq!(
            enriched.image_url.as_deref(),
            Some("https://cdn.example.com/thumb.jpg")
        );
        assert_eq!(enriched.card.title, "Patch 14.2 notes");
    }

    #[test]
    fn test_from_listing_without_thumbnail() {
        let mut raw = card("https://example.com/a");
        raw.description = String::new();
        raw.thumbnail = None;
        let enriched = EnrichedCard::from_listing(raw);
        assert!(enriched.description.is_empty());
        assert!(enriched.image_url.is_none());
    }
}
