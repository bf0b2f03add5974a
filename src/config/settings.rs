//! Application settings.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::extract::ListingPattern;
use crate::http_client::USER_AGENT;
use crate::search::{SearchQuery, INSPECTION_ENDPOINT};

/// Default filename for the saved results page.
pub const DEFAULT_PAGE_FILE: &str = "inspection_page.html";

/// Resolved application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Search results endpoint.
    pub endpoint: String,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Where the raw results page is saved and read back from.
    pub page_file: PathBuf,
    /// How listings are recognized on the page.
    pub listing: ListingPattern,
    /// Search parameter overrides applied to every query.
    pub params: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: INSPECTION_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: 30,
            page_file: PathBuf::from(DEFAULT_PAGE_FILE),
            listing: ListingPattern::default(),
            params: Vec::new(),
        }
    }
}

impl Settings {
    /// Apply `FOODSAFETY_ENDPOINT` and `FOODSAFETY_PAGE_FILE`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(endpoint) = non_empty_env("FOODSAFETY_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(page_file) = non_empty_env("FOODSAFETY_PAGE_FILE") {
            self.page_file = PathBuf::from(page_file);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Base query with the configured overrides applied.
    pub fn base_query(&self) -> SearchQuery {
        self.params
            .iter()
            .fold(SearchQuery::new(), |query, (name, value)| {
                query.with(name, value.as_str())
            })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_query_applies_params() {
        let settings = Settings {
            params: vec![
                ("City".to_string(), "Seattle".to_string()),
                ("Nope".to_string(), "x".to_string()),
            ],
            ..Default::default()
        };
        let query = settings.base_query();
        assert_eq!(query.get("City"), Some("Seattle"));
        assert_eq!(query.get("Nope"), None);
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, INSPECTION_ENDPOINT);
        assert_eq!(settings.page_file, PathBuf::from(DEFAULT_PAGE_FILE));
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }
}
