//! Per-source scraping pipeline.
//!
//! One listing URL in, finished articles out: fetch the page, extract its
//! cards, drop the ones without a usable absolute link, enrich the rest
//! from their article pages (unless disabled), and normalize. Detail
//! fetches run one at a time so article order always mirrors card order
//! on the listing page.

pub mod detail;
pub mod listing;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::Html;
use tracing::{instrument, warn};
use url::Url;

use crate::config::Selectors;
use crate::error::ScrapeError;
use crate::fetch;
use crate::models::{Article, EnrichedCard};
use crate::normalize;

/// Scrape one listing URL into normalized articles.
///
/// Fails only when the listing itself cannot be fetched; everything past
/// that point degrades per card instead of failing the source.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn scrape_source(
    client: &Client,
    url: &str,
    selectors: &Selectors,
    fetch_details: bool,
) -> Result<Vec<Article>, ScrapeError> {
    let base = Url::parse(url)?;
    let html = fetch::fetch_html(client, url).await?;
    Ok(collect_articles(client, &html, &base, selectors, fetch_details).await)
}

/// The offline part of the pipeline plus per-card enrichment.
pub(crate) async fn collect_articles(
    client: &Client,
    html: &str,
    base: &Url,
    selectors: &Selectors,
    fetch_details: bool,
) -> Vec<Article> {
    // Html holds Rc internals, so parse and extract before any await.
    let cards = {
        let document = Html::parse_document(html);
        listing::extract_cards(&document, base, selectors)
    };

    let mut linked = Vec::with_capacity(cards.len());
    for card in cards {
        if card.absolute_link().is_some() {
            linked.push(card);
        } else {
            warn!(href = %card.href, title = %card.title, "Card has no absolute link; skipping");
        }
    }

    let enriched: Vec<EnrichedCard> = if fetch_details {
        stream::iter(linked)
            .then(|card| detail::enrich(client, card, selectors))
            .collect()
            .await
    } else {
        linked.into_iter().map(EnrichedCard::from_listing).collect()
    };

    enriched.into_iter().map(normalize::normalize).collect()
}
