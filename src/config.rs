//! Selector configuration: which CSS paths identify a card and its parts.
//!
//! This is pure data, chosen per listing site: one selector for the card
//! element itself, one per optional sub-element, and one for the summary
//! container on a detail page. The defaults target listing pages that
//! mark their featured cards with stable `data-testid` attributes rather
//! than fragile positional classes.
//!
//! A YAML file passed via `--selectors` may override any subset of the
//! keys; omitted keys keep their defaults. All selectors are compiled and
//! validated once at startup so a typo fails the run before any network
//! traffic happens.

use scraper::Selector;
use serde::Deserialize;

use crate::error::ConfigError;

/// The raw, deserializable selector set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Matches one element per article card on a listing page. The card
    /// element is expected to be (or contain) the article anchor.
    pub card: String,
    /// Title sub-element, looked up within a card.
    pub title: String,
    /// Description sub-element, looked up within a card.
    pub description: String,
    /// Publish-time sub-element; its `datetime` attribute is read.
    pub date: String,
    /// Thumbnail sub-element; its `src` attribute is read.
    pub image: String,
    /// Summary container on a detail page; its first paragraph and first
    /// image feed enrichment.
    pub detail_summary: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: "a[data-testid='articlefeaturedcard-component']".to_string(),
            title: "[data-testid='card-title']".to_string(),
            description: "[data-testid='card-description']".to_string(),
            date: "time".to_string(),
            image: "img".to_string(),
            detail_summary: "article".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Load selector overrides from a YAML file.
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Compile every selector, failing on the first invalid one.
    pub fn compile(&self) -> Result<Selectors, ConfigError> {
        Ok(Selectors {
            card: parse_selector(&self.card)?,
            title: parse_selector(&self.title)?,
            description: parse_selector(&self.description)?,
            date: parse_selector(&self.date)?,
            image: parse_selector(&self.image)?,
            detail_summary: parse_selector(&self.detail_summary)?,
        })
    }
}

/// The compiled selector set used by the extractor and enricher.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub card: Selector,
    pub title: Selector,
    pub description: Selector,
    pub date: Selector,
    pub image: Selector,
    pub detail_summary: Selector,
}

fn parse_selector(css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}
