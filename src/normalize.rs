//! Normalization of enriched cards into publishable articles.
//!
//! Everything downstream of this module deals in finished strings: dates
//! already rendered in the RFC 822 shape feed readers expect, titles with
//! a placeholder substituted, and a stable guid derived from the link.
//!
//! # Date Handling
//!
//! Listing pages carry ISO 8601 timestamps in `datetime` attributes, with
//! or without fractional seconds. Both parse here. Anything else falls
//! back to the current time so an article is never dropped over a date.
//!
//! # Guids
//!
//! The guid is the lowercase hex MD5 of the article link. The same link
//! always yields the same guid, so readers that track read state by guid
//! keep it across repeated runs.

use chrono::{NaiveDateTime, Utc};
use md5::{Digest, Md5};
use tracing::debug;

use crate::models::{Article, EnrichedCard};
use crate::utils::clean_text;

/// RFC 822 style date format RSS readers expect, pinned to GMT.
pub const RSS_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Timestamp format listing pages use in `datetime` attributes. The `%.f`
/// accepts fractional seconds of any width, including none.
const SOURCE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Title substituted when a card had no recognizable title element.
const TITLE_PLACEHOLDER: &str = "No title";

/// Turn an enriched card into a publishable [`Article`].
///
/// The card's link must already be absolute; normalization does not touch
/// it beyond hashing it for the guid.
pub fn normalize(card: EnrichedCard) -> Article {
    let mut title = clean_text(&card.card.title);
    if title.is_empty() {
        title = TITLE_PLACEHOLDER.to_string();
    }

    let link = card.card.href;
    let guid = guid(&link);
    let published_at = format_pub_date(&card.card.raw_date);

    Article {
        title,
        link,
        description: card.description,
        published_at,
        guid,
        image_url: card.image_url,
    }
}

/// Render a source timestamp as an RSS `pubDate`, falling back to now.
fn format_pub_date(raw: &str) -> String {
    let raw = raw.trim();
    match NaiveDateTime::parse_from_str(raw, SOURCE_DATE_FORMAT) {
        Ok(parsed) => parsed.and_utc().format(RSS_DATE_FORMAT).to_string(),
        Err(e) => {
            if !raw.is_empty() {
                debug!(raw, error = %e, "Unparsable publish time; using current time");
            }
            Utc::now().format(RSS_DATE_FORMAT).to_string()
        }
    }
}

/// Stable guid for a link: lowercase hex MD5 of the URL string.
fn guid(link: &str) -> String {
    format!("{:x}", Md5::digest(link.as_bytes()))
}
