//! HTML extraction for search-result and detail pages
//!
//! Selector configuration, typed parsing errors, and the two parsers: one
//! for the search-results page, one for recovering the real image URL from
//! a listing's detail page.

pub mod config;
pub mod detail_image_parser;
pub mod error;
pub mod listing_parser;

// Re-export public types
pub use config::{DetailSelectors, ListingSelectors};
pub use detail_image_parser::DetailImageParser;
pub use error::{ParsingError, ParsingResult};
pub use listing_parser::ListingParser;
