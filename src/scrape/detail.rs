//! Detail-page enrichment.
//!
//! Listing cards are deliberately thin; the article page usually carries a
//! better standfirst paragraph and a full-size image. Enrichment is one
//! GET per card, strictly best-effort: any failure along the way (bad
//! link, network error, HTTP error, nothing matching on the page) keeps
//! the listing-derived values instead. A run never fails because one
//! article page was down.

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::config::Selectors;
use crate::error::ScrapeError;
use crate::fetch;
use crate::models::{EnrichedCard, RawCard};
use crate::utils::clean_text;

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// What a detail page contributed. Each part is independently optional
/// and only overrides the listing value when present.
#[derive(Debug, Default)]
struct DetailSummary {
    description: Option<String>,
    image: Option<String>,
}

/// Enrich one card from its article page, degrading to the listing data
/// on any failure.
pub async fn enrich(client: &Client, card: RawCard, selectors: &Selectors) -> EnrichedCard {
    let Some(link) = card.absolute_link() else {
        return EnrichedCard::from_listing(card);
    };

    match fetch_summary(client, &link, selectors).await {
        Ok(summary) => merge_summary(card, summary),
        Err(e) => {
            warn!(url = %link, error = %e, "Detail fetch failed; keeping listing data");
            EnrichedCard::from_listing(card)
        }
    }
}

async fn fetch_summary(
    client: &Client,
    url: &Url,
    selectors: &Selectors,
) -> Result<DetailSummary, ScrapeError> {
    let body = fetch::fetch_html(client, url.as_str()).await?;
    Ok(extract_summary(&body, url, selectors))
}

/// Pull the first non-empty paragraph and the first image out of the
/// configured summary container.
fn extract_summary(html: &str, base: &Url, selectors: &Selectors) -> DetailSummary {
    let document = Html::parse_document(html);
    let Some(container) = document.select(&selectors.detail_summary).next() else {
        return DetailSummary::default();
    };

    let description = container
        .select(&PARAGRAPH)
        .map(|p| clean_text(&p.text().collect::<Vec<_>>().join(" ")))
        .find(|text| !text.is_empty());

    let image = container
        .select(&IMAGE)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .find(|src| !src.is_empty())
        .map(|src| match base.join(src) {
            Ok(url) => url.to_string(),
            Err(_) => src.to_string(),
        });

    DetailSummary { description, image }
}

fn merge_summary(card: RawCard, summary: DetailSummary) -> EnrichedCard {
    let mut enriched = EnrichedCard::from_listing(card);
    if let Some(description) = summary.description {
        enriched.description = description;
    }
    if let Some(image) = summary.image {
        enriched.image_url = Some(image);
    }
    enriched
}
