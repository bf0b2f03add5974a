//! Inspection record extraction from a parsed results page.
//!
//! Each facility on the page is a "listing": an element whose `id` looks like
//! `PR0001234~`. A listing holds a metadata table (name, address, ...) and an
//! inspection history table. Extraction turns every listing into one
//! [`Record`] combining both.

mod classify;
mod error;
mod metadata;
mod node;
mod pipeline;
mod record;
mod score;
mod select;

pub use classify::{clean_text, is_inspection_row, is_metadata_row};
pub use error::ExtractError;
pub use metadata::{extract_metadata, fold_labeled_rows, MetadataRecord};
pub use node::TreeNode;
pub use pipeline::{
    collect_records, extract_listing, extract_records, extract_records_with, Records,
};
pub use record::{FieldValue, Record, AVERAGE_FIELD, HIGH_SCORE_FIELD, TOTAL_INSPECTIONS_FIELD};
pub use score::{extract_scores, ScoreSummary};
pub use select::{select_listings, ListingPattern, DEFAULT_LISTING_PREFIX, DEFAULT_LISTING_SUFFIX};

/// Listing identifier for error reports.
fn listing_id<N: TreeNode>(listing: &N) -> String {
    listing.identifier().unwrap_or_default().to_string()
}
