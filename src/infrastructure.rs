//! Infrastructure layer for HTTP fetching, HTML parsing, and the scraping
//! pipeline
//!
//! Site constants, the browser-mimicking page fetcher, the listing and
//! detail-image parsers, and the composition root that wires them together.

pub mod config; // Site constants and URL construction
pub mod fetcher; // Browser-mimicking HTTP GET with typed failures
pub mod logging; // Logging infrastructure
pub mod parsing; // Listing and detail-page extraction
pub mod scraping; // Pipeline composition root

// Re-export commonly used items
pub use config::{ebay, search_url};
pub use fetcher::{FetchError, FetchPage, FetcherConfig, PageFetcher};
pub use logging::{init_logging, init_logging_with_filter};
pub use parsing::{
    DetailImageParser, DetailSelectors, ListingParser, ListingSelectors, ParsingError,
    ParsingResult,
};
pub use scraping::{ScrapeConfig, ScrapeError, SearchScraper};
