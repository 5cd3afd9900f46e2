//! Detail-page image parser
//!
//! When a search-results thumbnail is the lazy-load placeholder, the real
//! image URL lives on the listing's own detail page, on a primary image
//! element with a fixed id. This parser recovers that `src`.

use super::config::DetailSelectors;
use super::error::{ParsingError, ParsingResult};
use anyhow::{Result, anyhow};
use scraper::{Html, Selector};

/// Parser for extracting the primary image URL from a listing detail page
pub struct DetailImageParser {
    primary_image: Selector,
    /// Selector source, kept for error reporting
    selector_source: String,
}

impl DetailImageParser {
    /// Create a parser with the default eBay selector.
    pub fn new() -> Result<Self> {
        Self::with_config(&DetailSelectors::default())
    }

    /// Create a parser with custom selector configuration.
    pub fn with_config(selectors: &DetailSelectors) -> Result<Self> {
        let primary_image = Selector::parse(&selectors.primary_image).map_err(|e| {
            anyhow!(
                "invalid CSS selector '{}': {}",
                selectors.primary_image,
                e
            )
        })?;

        Ok(Self {
            primary_image,
            selector_source: selectors.primary_image.clone(),
        })
    }

    /// Extract the primary image `src` from a detail-page document.
    pub fn parse(&self, html: &Html) -> ParsingResult<String> {
        html.select(&self.primary_image)
            .next()
            .and_then(|element| element.value().attr("src"))
            .map(str::to_string)
            .ok_or_else(|| ParsingError::missing_detail_image(&self.selector_source))
    }
}
