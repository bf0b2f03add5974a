//! Row classifiers.
//!
//! Pure predicates deciding what a table row is. Metadata rows are label/value
//! pairs; inspection rows are one inspection event each.

use super::node::TreeNode;

/// Keyword every inspection row label contains.
const INSPECTION_KEYWORD: &str = "inspection";

/// Cell text with surrounding whitespace, colons and hyphens removed.
///
/// Returns an empty string when the cell has no text payload.
pub fn clean_text<N: TreeNode>(cell: &N) -> String {
    cell.text_payload()
        .map(|text| {
            text.trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
                .to_string()
        })
        .unwrap_or_default()
}

/// Direct `td` children of a row.
pub fn cells<N: TreeNode>(row: &N) -> Vec<N> {
    row.children_matching(|child| child.is_tag("td"))
}

/// A `tr` with exactly two direct cells: label and value.
pub fn is_metadata_row<N: TreeNode>(node: &N) -> bool {
    node.is_tag("tr") && cells(node).len() == 2
}

/// A `tr` with exactly four direct cells whose first cell mentions an
/// inspection without starting with the word.
///
/// `"Routine Inspection"` matches; the `"Inspections"` section header and
/// `"Inspection Summary"` do not.
pub fn is_inspection_row<N: TreeNode>(node: &N) -> bool {
    if !node.is_tag("tr") {
        return false;
    }

    let cells = cells(node);
    if cells.len() != 4 {
        return false;
    }

    let label = clean_text(&cells[0]).to_lowercase();
    if label.is_empty() {
        return false;
    }

    label.contains(INSPECTION_KEYWORD) && !label.starts_with(INSPECTION_KEYWORD)
}
