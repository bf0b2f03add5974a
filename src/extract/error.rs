//! Extraction error types.

use std::num::ParseIntError;

use thiserror::Error;

/// A listing that cannot be turned into a record.
///
/// Both variants are per-listing and not retryable: the same document
/// reproduces them every time.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Listing {listing_id} has no body table")]
    MissingStructure { listing_id: String },
    #[error("Listing {listing_id}: inspection row {row_index} has a non-integer score {value:?}")]
    MalformedScore {
        listing_id: String,
        row_index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ExtractError {
    /// Identifier of the listing the error was raised for.
    pub fn listing_id(&self) -> &str {
        match self {
            Self::MissingStructure { listing_id } => listing_id,
            Self::MalformedScore { listing_id, .. } => listing_id,
        }
    }
}
