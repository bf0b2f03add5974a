//! Inspection score aggregation.

use serde::Serialize;
use tracing::debug;

use super::classify::{cells, clean_text, is_inspection_row};
use super::error::ExtractError;
use super::listing_id;
use super::node::TreeNode;

/// Direct `td` child of an inspection row holding the score.
const SCORE_CELL: usize = 2;

/// Aggregate of one listing's inspection scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub count: usize,
    /// Widened so that summing `i64` scores cannot overflow.
    pub total: i128,
    /// `total / count`, or 0 without inspections.
    pub average: f64,
    /// Highest score seen. Starts at 0, so it never reports below 0.
    pub high: i64,
}

impl ScoreSummary {
    /// Summarize a sequence of scores.
    pub fn from_scores<I: IntoIterator<Item = i64>>(scores: I) -> Self {
        let mut summary = scores
            .into_iter()
            .fold(Self::default(), |mut summary, score| {
                summary.count += 1;
                summary.total += i128::from(score);
                summary.high = summary.high.max(score);
                summary
            });

        if summary.count > 0 {
            summary.average = summary.total as f64 / summary.count as f64;
        }
        summary
    }
}

/// Aggregate the scores of every inspection row under `listing`.
///
/// Rows are searched at any depth. A score that is not an integer fails the
/// whole listing; it is never skipped or read as zero.
pub fn extract_scores<N: TreeNode>(listing: &N) -> Result<ScoreSummary, ExtractError> {
    let rows = listing.descendants_matching(|row| is_inspection_row(row));

    let scores = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let value = cells(row)
                .get(SCORE_CELL)
                .map(clean_text)
                .unwrap_or_default();
            value
                .parse::<i64>()
                .map_err(|source| ExtractError::MalformedScore {
                    listing_id: listing_id(listing),
                    row_index,
                    value,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = ScoreSummary::from_scores(scores);
    debug!(
        "Listing {}: {} inspections, high score {}",
        listing_id(listing),
        summary.count,
        summary.high
    );
    Ok(summary)
}
