//! Scraping pipeline composition root
//!
//! [`SearchScraper`] wires the query builder, page fetcher, and parsers
//! into one search operation: build URL → fetch → parse → resolve
//! placeholder images → capped result collection. Stateless across
//! searches; every call owns its own collection and its own fetches.

use crate::domain::{Listing, SearchQuery, SearchResults};
use crate::infrastructure::config::{ebay, search_url};
use crate::infrastructure::fetcher::{FetchError, FetchPage, FetcherConfig, PageFetcher};
use crate::infrastructure::parsing::{
    DetailImageParser, DetailSelectors, ListingParser, ListingSelectors, ParsingError,
};
use anyhow::{Context, Result};
use scraper::Html;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Configuration for the whole pipeline
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ScrapeConfig {
    pub fetcher: FetcherConfig,
    pub listing_selectors: ListingSelectors,
    pub detail_selectors: DetailSelectors,
}

/// Failure categories a search can surface, distinguishable by callers
/// that need to tell a failed fetch from a page with no listings
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parsing(#[from] ParsingError),
}

/// Stateless search pipeline over a pluggable page source.
///
/// Immutable after construction; each [`Self::search`] call builds a fresh
/// [`SearchResults`], so one scraper can be shared (e.g. behind `Arc`)
/// across requests.
pub struct SearchScraper {
    fetcher: Box<dyn FetchPage>,
    listing_parser: ListingParser,
    detail_parser: DetailImageParser,
}

impl SearchScraper {
    /// Create a scraper with a real [`PageFetcher`].
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let fetcher =
            PageFetcher::with_config(&config.fetcher).context("failed to create page fetcher")?;
        Self::with_fetcher(Box::new(fetcher), config)
    }

    /// Create a scraper over any [`FetchPage`] implementation.
    pub fn with_fetcher(fetcher: Box<dyn FetchPage>, config: &ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            listing_parser: ListingParser::with_config(&config.listing_selectors)
                .context("failed to create listing parser")?,
            detail_parser: DetailImageParser::with_config(&config.detail_selectors)
                .context("failed to create detail image parser")?,
        })
    }

    /// Run one search end-to-end, returning the typed failure category on
    /// error.
    ///
    /// The search-page fetch and every detail-page fetch are awaited
    /// strictly in sequence; there is no fan-out.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, ScrapeError> {
        let url = search_url(query);
        info!("searching: {}", url);

        let body = self.fetcher.fetch_html(&url).await?;

        // Parse and extract synchronously so the future stays Send
        // (scraper::Html is not Send).
        let mut listings = {
            let html = Html::parse_document(&body);
            self.listing_parser.parse(&html)?
        };

        for listing in &mut listings {
            if listing.image_url == ebay::PLACEHOLDER_IMAGE {
                self.resolve_placeholder_image(listing).await;
            }
        }

        let results = SearchResults::new(listings);
        info!("search finished with {} listings", results.len());
        Ok(results)
    }

    /// Swallow-and-log boundary: any failure degrades to an empty
    /// collection, so callers never see a panic or an error value.
    ///
    /// An empty return is indistinguishable from "no matches" here; use
    /// [`Self::search`] to tell the categories apart.
    pub async fn search_or_empty(&self, query: &SearchQuery) -> SearchResults {
        match self.search(query).await {
            Ok(results) => results,
            Err(e) => {
                error!("search failed, returning empty results: {}", e);
                SearchResults::empty()
            }
        }
    }

    /// Replace a placeholder thumbnail with the real image from the
    /// listing's detail page.
    ///
    /// Degrades gracefully: if the secondary fetch fails or the detail page
    /// has no primary image, the listing keeps the placeholder URL and the
    /// search continues.
    async fn resolve_placeholder_image(&self, listing: &mut Listing) {
        debug!(
            "placeholder image for '{}', fetching detail page: {}",
            listing.name, listing.detail_link
        );

        let body = match self.fetcher.fetch_html(&listing.detail_link).await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "detail fetch for '{}' failed, keeping placeholder image: {}",
                    listing.name, e
                );
                return;
            }
        };

        let image = {
            let html = Html::parse_document(&body);
            self.detail_parser.parse(&html)
        };

        match image {
            Ok(src) => listing.image_url = src,
            Err(e) => {
                warn!(
                    "no primary image on detail page for '{}', keeping placeholder: {}",
                    listing.name, e
                );
            }
        }
    }
}
