//! Scraped listing records and the per-search result collection

use serde::{Deserialize, Serialize};

/// One scraped search-result entry.
///
/// Every field except `condition` is always populated: when the source
/// markup is missing a field, the extractor substitutes
/// [`Listing::MISSING_FIELD`] so the record keeps a fixed shape even under
/// partial scrape failures. `condition` is the only field allowed to be
/// entirely absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub detail_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub price: String,
    pub image_url: String,
}

impl Listing {
    /// Placeholder substituted for a missing mandatory field.
    pub const MISSING_FIELD: &'static str = " ";
}

/// Ordered collection of listings produced by one search.
///
/// Insertion order is source-page order; the constructor enforces the
/// [`Self::MAX_LISTINGS`] cap and entries are never removed or reordered
/// afterwards. Each search call builds a fresh collection owned by the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults(Vec<Listing>);

impl SearchResults {
    /// Upper bound on listings kept per search, regardless of how many the
    /// source page contains.
    pub const MAX_LISTINGS: usize = 10;

    /// Wrap extracted listings, silently dropping anything past the cap.
    #[must_use]
    pub fn new(mut listings: Vec<Listing>) -> Self {
        listings.truncate(Self::MAX_LISTINGS);
        Self(listings)
    }

    /// An empty collection (e.g. for a degraded search).
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read-only view of the listings in source-page order.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.0.iter()
    }

    /// Consume the collection, handing ownership of the listings to the
    /// caller.
    #[must_use]
    pub fn into_vec(self) -> Vec<Listing> {
        self.0
    }
}

impl IntoIterator for SearchResults {
    type Item = Listing;
    type IntoIter = std::vec::IntoIter<Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
