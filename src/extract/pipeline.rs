//! Listing-to-record pipeline.

use std::iter::FusedIterator;
use std::vec;

use scraper::{ElementRef, Html};
use tracing::debug;

use super::error::ExtractError;
use super::metadata::extract_metadata;
use super::node::TreeNode;
use super::record::Record;
use super::score::extract_scores;
use super::select::{select_listings, ListingPattern};

/// Build the record for one listing.
pub fn extract_listing<N: TreeNode>(listing: &N) -> Result<Record, ExtractError> {
    let metadata = extract_metadata(listing)?;
    let scores = extract_scores(listing)?;
    Ok(Record::merge(metadata, &scores))
}

/// Lazy, single-pass sequence of records in document order.
///
/// Listings are located up front; each record is only built when pulled. An
/// `Err` item covers that one listing, so a caller can stop there or keep
/// pulling to skip it.
pub struct Records<N> {
    listings: vec::IntoIter<N>,
}

impl<N: TreeNode> Records<N> {
    /// Records for every listing under `root`.
    pub fn new(root: N, pattern: &ListingPattern) -> Self {
        let listings = select_listings(root, pattern);
        debug!("Found {} listings", listings.len());
        Self {
            listings: listings.into_iter(),
        }
    }

    /// Listings not yet visited.
    pub fn remaining(&self) -> usize {
        self.listings.len()
    }
}

impl<N: TreeNode> Iterator for Records<N> {
    type Item = Result<Record, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let listing = self.listings.next()?;
        Some(extract_listing(&listing))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.listings.size_hint()
    }
}

impl<N: TreeNode> ExactSizeIterator for Records<N> {}

impl<N: TreeNode> FusedIterator for Records<N> {}

/// Records for every listing in a parsed results page, using the default
/// listing pattern.
pub fn extract_records(document: &Html) -> Records<ElementRef<'_>> {
    extract_records_with(document, &ListingPattern::default())
}

/// Records for every listing matching `pattern`.
pub fn extract_records_with<'a>(
    document: &'a Html,
    pattern: &ListingPattern,
) -> Records<ElementRef<'a>> {
    Records::new(document.root_element(), pattern)
}

/// Collect every record, stopping at the first failing listing.
pub fn collect_records(document: &Html) -> Result<Vec<Record>, ExtractError> {
    extract_records(document).collect()
}
