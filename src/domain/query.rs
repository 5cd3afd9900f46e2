//! Validated search input
//!
//! A [`SearchQuery`] carries the normalized search term and an optional
//! price range. The both-or-none rule for price bounds is structural:
//! downstream code can only ever observe a complete [`PriceRange`] or none.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while validating search input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("search term is empty")]
    EmptyTerm,
}

/// A complete low/high price bound pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// Validated search input: normalized term plus optional price bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    term: String,
    price_range: Option<PriceRange>,
}

impl SearchQuery {
    /// Create a query from a free-text term.
    ///
    /// Whitespace-delimited words are joined with `+` so the term can be
    /// embedded in a URL verbatim. A term that is empty (or all whitespace)
    /// is rejected.
    pub fn new(term: &str) -> Result<Self, QueryError> {
        let normalized = term.split_whitespace().collect::<Vec<_>>().join("+");
        if normalized.is_empty() {
            return Err(QueryError::EmptyTerm);
        }

        Ok(Self {
            term: normalized,
            price_range: None,
        })
    }

    /// Set a complete price range (builder style).
    #[must_use]
    pub fn with_price_range(mut self, low: f64, high: f64) -> Self {
        self.price_range = Some(PriceRange { low, high });
        self
    }

    /// Accept the optional bound pair as it arrives from a search form.
    ///
    /// Bounds are used only when both are present; a one-sided bound is
    /// dropped entirely.
    #[must_use]
    pub fn with_price_bounds(mut self, low: Option<f64>, high: Option<f64>) -> Self {
        self.price_range = match (low, high) {
            (Some(low), Some(high)) => Some(PriceRange { low, high }),
            (None, None) => None,
            (low, high) => {
                debug!(
                    "dropping one-sided price bound (low={:?}, high={:?}); both bounds are required",
                    low, high
                );
                None
            }
        };
        self
    }

    /// The normalized, URL-safe search term (words joined by `+`).
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The price range, present only when both bounds were supplied.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }
}
