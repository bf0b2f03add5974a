//! Search query parameters.

use chrono::NaiveDate;
use tracing::debug;
use url::Url;

/// Date format the search form expects.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Every parameter the search accepts, with its default value.
pub const BASE_PARAMS: [(&str, &str); 16] = [
    ("Output", "W"),
    ("Business_Name", ""),
    ("Business_Address", ""),
    ("Longitude", ""),
    ("Latitude", ""),
    ("City", ""),
    ("Zip_Code", ""),
    ("Inspection_Type", "All"),
    ("Inspection_Start", ""),
    ("Inspection_End", ""),
    ("Inspection_Closed_Business", "A"),
    ("Violation_Points", ""),
    ("Violation_Red_Points", ""),
    ("Violation_Descr", ""),
    ("Fuzzy_Search", "N"),
    ("Sort", "B"),
];

/// A full set of search parameters.
///
/// Only names from [`BASE_PARAMS`] can be set; anything else is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(String, String)>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            params: BASE_PARAMS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip code 98101, inspections between 2014-03-03 and 2016-03-03.
    pub fn sample() -> Self {
        Self::new().zip_code("98101").inspection_range(
            NaiveDate::from_ymd_opt(2014, 3, 3).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2016, 3, 3).unwrap_or_default(),
        )
    }

    /// Override a parameter. Returns false if `name` is not a known parameter.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => {
                debug!("Ignoring unknown search parameter {}", name);
                false
            }
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn zip_code(self, zip: &str) -> Self {
        self.with("Zip_Code", zip)
    }

    pub fn business_name(self, name: &str) -> Self {
        self.with("Business_Name", name)
    }

    pub fn city(self, city: &str) -> Self {
        self.with("City", city)
    }

    pub fn inspection_start(self, start: NaiveDate) -> Self {
        self.with("Inspection_Start", start.format(DATE_FORMAT).to_string())
    }

    pub fn inspection_end(self, end: NaiveDate) -> Self {
        self.with("Inspection_End", end.format(DATE_FORMAT).to_string())
    }

    pub fn inspection_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.inspection_start(start).inspection_end(end)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Full request URL for `endpoint`.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(endpoint, &self.params)
    }
}

/// Parse a date as `YYYY-MM-DD` or the search form's `MM/DD/YYYY`.
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT))
}
