//! Facility metadata extraction.
//!
//! A listing's body table holds label/value rows. Continuation rows leave the
//! label cell blank and belong to the last labeled row above them, so an
//! address spread over two rows comes out as one label with two values.

use indexmap::IndexMap;
use tracing::debug;

use super::classify::{cells, clean_text, is_metadata_row};
use super::error::ExtractError;
use super::listing_id;
use super::node::TreeNode;

/// Label to values, in the order labels were first seen.
pub type MetadataRecord = IndexMap<String, Vec<String>>;

/// Fold `(label, value)` pairs into a record, carrying the last non-blank
/// label over blank ones.
///
/// Values seen before any label land under the empty-string key.
pub fn fold_labeled_rows<I, L, V>(rows: I) -> MetadataRecord
where
    I: IntoIterator<Item = (L, V)>,
    L: Into<String>,
    V: Into<String>,
{
    let (_, record) = rows.into_iter().fold(
        (String::new(), MetadataRecord::new()),
        |(current, mut record), (label, value)| {
            let label = label.into();
            let current = if label.trim().is_empty() {
                current
            } else {
                label
            };
            record
                .entry(current.clone())
                .or_default()
                .push(value.into());
            (current, record)
        },
    );
    record
}

/// Extract the metadata record of one listing.
///
/// Only direct rows of the listing's first `tbody` are read.
pub fn extract_metadata<N: TreeNode>(listing: &N) -> Result<MetadataRecord, ExtractError> {
    let body = listing
        .first_descendant("tbody")
        .ok_or_else(|| ExtractError::MissingStructure {
            listing_id: listing_id(listing),
        })?;

    let rows = body.children_matching(|row| is_metadata_row(row));
    debug!(
        "Listing {}: {} metadata rows",
        listing_id(listing),
        rows.len()
    );

    Ok(fold_labeled_rows(rows.iter().map(|row| {
        let cells = cells(row);
        (clean_text(&cells[0]), clean_text(&cells[1]))
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    use crate::extract::select::{select_listings, ListingPattern};

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        fold_labeled_rows(pairs.iter().copied())
    }

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn carries_label_over_blank_rows() {
        let record = record(&[("Name", "A"), ("", "B"), ("Addr", "C"), ("", "D")]);
        assert_eq!(record.len(), 2);
        assert_eq!(record["Name"], values(&["A", "B"]));
        assert_eq!(record["Addr"], values(&["C", "D"]));
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["Name", "Addr"]
        );
    }

    #[test]
    fn leading_blank_labels_use_empty_key() {
        let record = record(&[("", "orphan"), ("Name", "A")]);
        assert_eq!(record[""], values(&["orphan"]));
        assert_eq!(record["Name"], values(&["A"]));
    }

    #[test]
    fn repeated_label_accumulates() {
        let record = record(&[("Phone", "1"), ("Name", "A"), ("Phone", "2")]);
        assert_eq!(record["Phone"], values(&["1", "2"]));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["Phone", "Name"]);
    }

    #[test]
    fn empty_input_yields_empty_record() {
        assert!(record(&[]).is_empty());
    }

    #[test]
    fn extracts_from_listing_table() {
        let document = Html::parse_document(
            r#"<div id="PR0001~">
                <table>
                  <tr><td>Business Name:</td><td>CAFE A</td></tr>
                  <tr><td>Address:</td><td>123 MAIN ST</td></tr>
                  <tr><td></td><td>Seattle, WA 98101</td></tr>
                  <tr><td>ignored</td><td>x</td><td>y</td></tr>
                </table>
              </div>"#,
        );
        let listing = select_listings(document.root_element(), &ListingPattern::default())[0];
        let record = extract_metadata(&listing).expect("metadata");

        assert_eq!(record["Business Name"], values(&["CAFE A"]));
        assert_eq!(
            record["Address"],
            values(&["123 MAIN ST", "Seattle, WA 98101"])
        );
        assert!(!record.contains_key("ignored"));
    }

    #[test]
    fn nested_rows_are_not_metadata() {
        let document = Html::parse_document(
            r#"<div id="PR0002~"><table>
                <tr><td>Name</td><td>B</td></tr>
                <tr><td colspan="2"><table><tr><td>Inner</td><td>no</td></tr></table></td></tr>
               </table></div>"#,
        );
        let listing = select_listings(document.root_element(), &ListingPattern::default())[0];
        let record = extract_metadata(&listing).expect("metadata");
        assert_eq!(record.len(), 1);
        assert_eq!(record["Name"], values(&["B"]));
    }

    #[test]
    fn table_without_metadata_rows_is_empty() {
        let document = Html::parse_document(
            r#"<div id="PR0003~"><table><tr><td>only one cell</td></tr></table></div>"#,
        );
        let listing = select_listings(document.root_element(), &ListingPattern::default())[0];
        assert!(extract_metadata(&listing).expect("metadata").is_empty());
    }

    #[test]
    fn missing_table_is_structural_error() {
        let document = Html::parse_document(r#"<div id="PR0004~"><p>no table</p></div>"#);
        let listing = select_listings(document.root_element(), &ListingPattern::default())[0];
        let err = extract_metadata(&listing).unwrap_err();
        assert!(matches!(err, ExtractError::MissingStructure { .. }));
        assert_eq!(err.listing_id(), "PR0004~");
    }
}
