//! Site constants and search-URL construction
//!
//! Everything the pipeline knows about eBay's URL structure lives here, so
//! a markup or parameter change on the site is a one-file edit.

use crate::domain::SearchQuery;

/// eBay URLs and query-parameter constants
pub mod ebay {
    /// Base URL for eBay, also used to resolve relative listing links
    pub const BASE_URL: &str = "https://www.ebay.com";

    /// Path of the search-results endpoint
    pub const SEARCH_PATH: &str = "/sch/parser.html";

    /// Lazy-load stand-in image served before JavaScript populates the real
    /// thumbnail; its presence means the real image lives on the listing's
    /// detail page
    pub const PLACEHOLDER_IMAGE: &str = "https://ir.ebaystatic.com/cr/v/c1/s_1x2.gif";

    /// Per-page result-count hint sent to the site. Independent of the
    /// 10-item cap applied by the parser.
    pub const RESULTS_PER_PAGE_HINT: u32 = 25;

    /// Query-parameter names for the search endpoint
    pub mod params {
        /// Referrer-style token eBay expects on search URLs
        pub const FROM: &str = "_from";

        /// Value of the `_from` token
        pub const FROM_TOKEN: &str = "R40";

        /// Search keywords parameter
        pub const KEYWORDS: &str = "_nkw";

        /// Items-per-page hint parameter
        pub const ITEMS_PER_PAGE: &str = "_ipg";

        /// Lower price bound parameter
        pub const PRICE_LOW: &str = "_udlo";

        /// Upper price bound parameter
        pub const PRICE_HIGH: &str = "_udhi";
    }
}

/// Build the search-results URL for a validated query.
///
/// Pure string construction: the term is already URL-safe (words joined by
/// `+`) and the price clause is appended only when the query carries a
/// complete bound pair.
#[must_use]
pub fn search_url(query: &SearchQuery) -> String {
    use ebay::params;

    let mut url = format!(
        "{}{}?{}={}&{}={}&{}={}",
        ebay::BASE_URL,
        ebay::SEARCH_PATH,
        params::FROM,
        params::FROM_TOKEN,
        params::KEYWORDS,
        query.term(),
        params::ITEMS_PER_PAGE,
        ebay::RESULTS_PER_PAGE_HINT,
    );

    if let Some(range) = query.price_range() {
        url.push_str(&format!(
            "&{}={}&{}={}",
            params::PRICE_LOW,
            range.low,
            params::PRICE_HIGH,
            range.high,
        ));
    }

    url
}
