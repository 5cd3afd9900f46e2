//! Search-results page parser
//!
//! Extracts up to ten fixed-shape [`Listing`] records from the listing
//! wrappers of a fetched search page. Each of the five fields is extracted
//! independently with its own missing-data policy, so a half-broken listing
//! still yields a complete record.

use super::config::ListingSelectors;
use super::error::{ParsingError, ParsingResult};
use crate::domain::{Listing, SearchResults};
use crate::infrastructure::config::ebay;
use anyhow::{Context, Result, anyhow};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

/// Parser for extracting listings from search-result pages
pub struct ListingParser {
    wrapper: Selector,
    title: Selector,
    link: Selector,
    condition: Selector,
    price: Selector,
    image: Selector,
    /// Wrapper selector source, kept for error reporting
    wrapper_source: String,
    /// Base URL used to resolve relative detail links
    base_url: Url,
}

impl ListingParser {
    /// Create a parser with the default eBay selectors.
    pub fn new() -> Result<Self> {
        Self::with_config(&ListingSelectors::default())
    }

    /// Create a parser with custom selector configuration.
    pub fn with_config(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            wrapper: compile_selector(&selectors.wrapper)?,
            title: compile_selector(&selectors.title)?,
            link: compile_selector(&selectors.link)?,
            condition: compile_selector(&selectors.condition)?,
            price: compile_selector(&selectors.price)?,
            image: compile_selector(&selectors.image)?,
            wrapper_source: selectors.wrapper.clone(),
            base_url: Url::parse(ebay::BASE_URL).context("invalid site base URL")?,
        })
    }

    /// Extract listings from a search-results document.
    ///
    /// Takes the first [`SearchResults::MAX_LISTINGS`] wrappers in document
    /// order and silently drops the rest. A document with no wrappers at
    /// all is a structural failure, not an empty result.
    pub fn parse(&self, html: &Html) -> ParsingResult<Vec<Listing>> {
        let listings: Vec<Listing> = html
            .select(&self.wrapper)
            .take(SearchResults::MAX_LISTINGS)
            .map(|node| self.parse_listing(node))
            .collect();

        if listings.is_empty() {
            return Err(ParsingError::no_listings(&self.wrapper_source));
        }

        debug!("extracted {} listings", listings.len());
        Ok(listings)
    }

    /// Extract one listing from its wrapper node.
    ///
    /// No field's extraction depends on another's success; a missing field
    /// degrades per its own policy instead of failing the listing.
    fn parse_listing(&self, node: ElementRef<'_>) -> Listing {
        let name = self
            .extract_text(node, &self.title)
            .unwrap_or_else(|| Listing::MISSING_FIELD.to_string());

        let detail_link = self
            .extract_attr(node, &self.link, "href")
            .map(|href| self.resolve_link(&href))
            .unwrap_or_else(|| Listing::MISSING_FIELD.to_string());

        // The one optional field: absent stays absent, no placeholder.
        let condition = self.extract_text(node, &self.condition);

        let price = self
            .extract_text(node, &self.price)
            .unwrap_or_else(|| Listing::MISSING_FIELD.to_string());

        let image_url = self
            .extract_attr(node, &self.image, "src")
            .unwrap_or_else(|| Listing::MISSING_FIELD.to_string());

        Listing {
            name,
            detail_link,
            condition,
            price,
            image_url,
        }
    }

    /// Text of the first element matching `selector`, trimmed.
    /// Present-but-empty text counts as missing.
    fn extract_text(&self, node: ElementRef<'_>, selector: &Selector) -> Option<String> {
        node.select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    /// Attribute value of the first element matching `selector`.
    fn extract_attr(
        &self,
        node: ElementRef<'_>,
        selector: &Selector,
        attr: &str,
    ) -> Option<String> {
        node.select(selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    /// Resolve a relative href against the site base; absolute hrefs are
    /// kept verbatim.
    fn resolve_link(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            return href.to_string();
        }

        match self.base_url.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                debug!("keeping unresolvable href '{}' verbatim: {}", href, e);
                href.to_string()
            }
        }
    }
}

fn compile_selector(selector_str: &str) -> Result<Selector> {
    Selector::parse(selector_str)
        .map_err(|e| anyhow!("invalid CSS selector '{}': {}", selector_str, e))
}
