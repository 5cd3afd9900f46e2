//! eBay search-results extraction library
//!
//! This crate turns a free-text search term (plus an optional price range)
//! into an ordered collection of structured product listings scraped from
//! the first eBay search-results page. It covers the whole pipeline: URL
//! construction, browser-mimicking page fetch, HTML extraction, and the
//! secondary detail-page fetch that resolves lazy-load placeholder images.
//!
//! Presentation, routing, and persistence are the consumer's concern; the
//! crate only ever returns an in-memory [`SearchResults`] value.

// Module declarations
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for convenience
pub use domain::{Listing, PriceRange, QueryError, SearchQuery, SearchResults};
pub use infrastructure::{
    DetailImageParser, DetailSelectors, FetchError, FetchPage, FetcherConfig, ListingParser,
    ListingSelectors, PageFetcher, ParsingError, ParsingResult, ScrapeConfig, ScrapeError,
    SearchScraper, ebay, init_logging, init_logging_with_filter, search_url,
};
