//! Selector configuration for HTML extraction
//!
//! Defaults carry eBay's current markup markers; overriding a field is the
//! escape hatch when the site reshuffles a class name.

use serde::{Deserialize, Serialize};

/// CSS selectors for the search-results page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSelectors {
    /// Container demarcating one search result
    pub wrapper: String,
    /// Title element inside a wrapper
    pub title: String,
    /// Anchor linking to the listing's detail page
    pub link: String,
    /// Secondary-info element (e.g. "Brand New")
    pub condition: String,
    /// Price element
    pub price: String,
    /// Thumbnail image element
    pub image: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            wrapper: "div.s-item__wrapper".to_string(),
            title: "h3.s-item__title".to_string(),
            link: "a.s-item__link".to_string(),
            condition: "span.SECONDARY_INFO".to_string(),
            price: "span.s-item__price".to_string(),
            image: "img.s-item__image-img".to_string(),
        }
    }
}

/// CSS selectors for a listing's detail page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailSelectors {
    /// Primary image element, identified by a fixed element id
    pub primary_image: String,
}

impl Default for DetailSelectors {
    fn default() -> Self {
        Self {
            primary_image: "img#icImg".to_string(),
        }
    }
}
