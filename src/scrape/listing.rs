//! Card extraction from listing pages.
//!
//! A listing page presents each article as a "card": an anchor element
//! carrying a title, a short description, a publish time and a thumbnail.
//! Extraction is pure DOM work against an already-fetched page. Every
//! sub-element lookup is independently optional, so a sparse card still
//! produces a [`RawCard`] with empty fields rather than being dropped.

use scraper::{ElementRef, Html};
use tracing::debug;
use url::Url;

use crate::config::Selectors;
use crate::models::RawCard;
use crate::utils::clean_text;

/// Extract one [`RawCard`] per card element, in document order.
pub fn extract_cards(document: &Html, base: &Url, selectors: &Selectors) -> Vec<RawCard> {
    let cards: Vec<RawCard> = document
        .select(&selectors.card)
        .map(|element| extract_card(element, base, selectors))
        .collect();
    debug!(count = cards.len(), "Extracted listing cards");
    cards
}

fn extract_card(element: ElementRef<'_>, base: &Url, selectors: &Selectors) -> RawCard {
    let title = element
        .select(&selectors.title)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let description = element
        .select(&selectors.description)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let raw_date = element
        .select(&selectors.date)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .unwrap_or_default()
        .to_string();

    let thumbnail = element
        .select(&selectors.image)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| resolve(base, src));

    let href = element
        .value()
        .attr("href")
        .map(|href| resolve(base, href))
        .unwrap_or_default();

    RawCard {
        title,
        description,
        href,
        raw_date,
        thumbnail,
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Resolve an href against the listing page URL. Empty stays empty, and a
/// value `Url::join` cannot make sense of is kept verbatim so the caller
/// can report it.
fn resolve(base: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;

    const LISTING: &str = r#"
        <html><body>
          <a data-testid="articlefeaturedcard-component" href="/news/first">
            <h2 data-testid="card-title">First  story</h2>
            <p data-testid="card-description">All about the first story.</p>
            <time datetime="2024-03-14T09:26:53.589Z">March 14</time>
            <img src="/img/first.jpg">
          </a>
          <a data-testid="articlefeaturedcard-component" href="news/second">
            <h2 data-testid="card-title">Second story</h2>
          </a>
          <a data-testid="articlefeaturedcard-component" href="https://other.example.org/third">
            <h2 data-testid="card-title">Third story</h2>
            <time datetime="2024-03-15T10:00:00.000Z">March 15</time>
          </a>
        </body></html>
    "#;

    fn selectors() -> Selectors {
        SelectorConfig::default().compile().unwrap()
    }

    #[test]
    fn test_extracts_cards_in_document_order() {
        let document = Html::parse_document(LISTING);
        let base = Url::parse("https://example.com/section/").unwrap();

        let cards = extract_cards(&document, &base, &selectors());
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "First story");
        assert_eq!(cards[1].title, "Second story");
        assert_eq!(cards[2].title, "Third story");
    }

    #[test]
    fn test_resolves_root_relative_relative_and_absolute_hrefs() {
        let document = Html::parse_document(LISTING);
        let base = Url::parse("https://example.com/section/").unwrap();

        let cards = extract_cards(&document, &base, &selectors());
        assert_eq!(cards[0].href, "https://example.com/news/first");
        assert_eq!(cards[1].href, "https://example.com/section/news/second");
        assert_eq!(cards[2].href, "https://other.example.org/third");
    }

    #[test]
    fn test_full_card_fields() {
        let document = Html::parse_document(LISTING);
        let base = Url::parse("https://example.com/").unwrap();

        let cards = extract_cards(&document, &base, &selectors());
        let card = &cards[0];
        assert_eq!(card.description, "All about the first story.");
        assert_eq!(card.raw_date, "2024-03-14T09:26:53.589Z");
        assert_eq!(
            card.thumbnail.as_deref(),
            Some("https://example.com/img/first.jpg")
        );
    }

    #[test]
    fn test_missing_sub_elements_yield_defaults() {
        let document = Html::parse_document(LISTING);
        let base = Url::parse("https://example.com/").unwrap();

        let cards = extract_cards(&document, &base, &selectors());
        let card = &cards[1];
        assert_eq!(card.description, "");
        assert_eq!(card.raw_date, "");
        assert_eq!(card.thumbnail, None);
    }

    #[test]
    fn test_card_without_href_keeps_empty_link() {
        let html = r#"
            <a data-testid="articlefeaturedcard-component">
              <h2 data-testid="card-title">Unlinked</h2>
            </a>
        "#;
        let document = Html::parse_document(html);
        let base = Url::parse("https://example.com/").unwrap();

        let cards = extract_cards(&document, &base, &selectors());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].href, "");
    }

    #[test]
    fn test_page_without_cards_yields_nothing() {
        let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        let base = Url::parse("https://example.com/").unwrap();

        assert!(extract_cards(&document, &base, &selectors()).is_empty());
    }
}
