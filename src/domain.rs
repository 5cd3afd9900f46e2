//! Domain module - search input and scraped-record types
//!
//! Value types only: no network or parsing code lives here. Each module is
//! its own file in the domain/ directory, with public exports collected
//! below for convenience.

pub mod listing;
pub mod query;

// Re-export commonly used items for convenience
pub use listing::{Listing, SearchResults};
pub use query::{PriceRange, QueryError, SearchQuery};
