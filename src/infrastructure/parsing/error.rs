//! Typed parsing errors
//!
//! Per-listing extraction gaps are not errors (the listing parser fills
//! them with placeholders); these variants cover the structural failures a
//! caller can meaningfully distinguish.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// The listing-wrapper marker is absent from the document entirely
    #[error("no listings found (selector '{selector}')")]
    NoListings { selector: String },

    /// A detail page fetched for image resolution has no primary image
    /// element
    #[error("detail page has no primary image (selector '{selector}')")]
    MissingDetailImage { selector: String },
}

impl ParsingError {
    /// Create a no-listings error carrying the wrapper selector that found
    /// nothing
    pub fn no_listings(selector: &str) -> Self {
        Self::NoListings {
            selector: selector.to_string(),
        }
    }

    /// Create a missing-detail-image error carrying the selector that found
    /// nothing
    pub fn missing_detail_image(selector: &str) -> Self {
        Self::MissingDetailImage {
            selector: selector.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
