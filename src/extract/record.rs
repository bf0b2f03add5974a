//! Merged per-listing output records.

use indexmap::IndexMap;
use serde::Serialize;

use super::metadata::MetadataRecord;
use super::score::ScoreSummary;

pub const TOTAL_INSPECTIONS_FIELD: &str = "Total Inspections";
pub const AVERAGE_FIELD: &str = "Average";
pub const HIGH_SCORE_FIELD: &str = "High Score";

/// A single value in an output record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<String>),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// One facility: metadata fields followed by the score fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Merge metadata with a score summary.
    ///
    /// Score fields win on a key collision. The colliding key keeps its
    /// original position.
    pub fn merge(metadata: MetadataRecord, scores: &ScoreSummary) -> Self {
        let mut fields: IndexMap<String, FieldValue> = metadata
            .into_iter()
            .map(|(label, values)| (label, FieldValue::List(values)))
            .collect();

        fields.insert(
            TOTAL_INSPECTIONS_FIELD.to_string(),
            FieldValue::Integer(scores.count as i64),
        );
        fields.insert(AVERAGE_FIELD.to_string(), FieldValue::Float(scores.average));
        fields.insert(HIGH_SCORE_FIELD.to_string(), FieldValue::Integer(scores.high));

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of inspections, if the score fields are present.
    pub fn total_inspections(&self) -> Option<i64> {
        self.get(TOTAL_INSPECTIONS_FIELD)
            .and_then(FieldValue::as_integer)
    }

    pub fn average(&self) -> Option<f64> {
        self.get(AVERAGE_FIELD).and_then(FieldValue::as_float)
    }

    pub fn high_score(&self) -> Option<i64> {
        self.get(HIGH_SCORE_FIELD).and_then(FieldValue::as_integer)
    }
}
