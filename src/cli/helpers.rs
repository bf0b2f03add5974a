//! Shared helpers for CLI commands.

use anyhow::Context;
use chrono::NaiveDate;
use tracing::warn;

use foodsafety::config::Settings;
use foodsafety::http_client::HttpClient;
use foodsafety::search::{parse_date, SearchQuery};

/// Search filters shared by commands that hit the network.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SearchArgs {
    /// Zip code to search
    #[arg(long)]
    pub zip: Option<String>,

    /// Business name to search for
    #[arg(long)]
    pub business_name: Option<String>,

    /// City to search
    #[arg(long)]
    pub city: Option<String>,

    /// Earliest inspection date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Latest inspection date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Raw search parameter as NAME=VALUE (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl SearchArgs {
    fn is_empty(&self) -> bool {
        self.zip.is_none()
            && self.business_name.is_none()
            && self.city.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.params.is_empty()
    }
}

/// Parse a `NAME=VALUE` pair.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid NAME=VALUE: no `=` found in `{}`", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid NAME=VALUE: empty name in `{}`", s));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Build the search query: configured overrides, then command-line filters.
///
/// With no filters anywhere, the sample query (98101, March 2014 to March
/// 2016) is used.
pub fn build_query(settings: &Settings, args: &SearchArgs) -> SearchQuery {
    if args.is_empty() && settings.params.is_empty() {
        return SearchQuery::sample();
    }

    let mut query = settings.base_query();
    if let Some(ref zip) = args.zip {
        query = query.zip_code(zip);
    }
    if let Some(ref name) = args.business_name {
        query = query.business_name(name);
    }
    if let Some(ref city) = args.city {
        query = query.city(city);
    }
    if let Some(start) = args.start {
        query = query.inspection_start(start);
    }
    if let Some(end) = args.end {
        query = query.inspection_end(end);
    }
    for (name, value) in &args.params {
        if !query.set(name, value.as_str()) {
            warn!("Unknown search parameter {} ignored", name);
        }
    }
    query
}

pub fn build_client(settings: &Settings) -> anyhow::Result<HttpClient> {
    HttpClient::builder(settings.timeout())
        .user_agent(&settings.user_agent)
        .build()
        .context("Failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parsing() {
        assert_eq!(
            parse_key_val("City=Seattle").expect("pair"),
            ("City".to_string(), "Seattle".to_string())
        );
        assert_eq!(
            parse_key_val("Business_Name=A=B").expect("pair"),
            ("Business_Name".to_string(), "A=B".to_string())
        );
        assert!(parse_key_val("City").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn sample_query_without_filters() {
        let query = build_query(&Settings::default(), &SearchArgs::default());
        assert_eq!(query, SearchQuery::sample());
    }

    #[test]
    fn filters_override_configured_params() {
        let settings = Settings {
            params: vec![("Zip_Code".to_string(), "98004".to_string())],
            ..Default::default()
        };
        let args = SearchArgs {
            start: NaiveDate::from_ymd_opt(2015, 1, 2),
            params: vec![("Zip_Code".to_string(), "98109".to_string())],
            ..Default::default()
        };

        let query = build_query(&settings, &args);
        assert_eq!(query.get("Zip_Code"), Some("98109"));
        assert_eq!(query.get("Inspection_Start"), Some("01/02/2015"));
        assert_eq!(query.get("Inspection_End"), Some(""));
    }

    #[test]
    fn business_name_filter_replaces_sample_query() {
        let args = SearchArgs {
            business_name: Some("SPICE ROUTE".to_string()),
            ..Default::default()
        };

        let query = build_query(&Settings::default(), &args);
        assert_eq!(query.get("Business_Name"), Some("SPICE ROUTE"));
        assert_eq!(query.get("Zip_Code"), Some(""));
    }

    #[test]
    fn city_filter_combines_with_zip() {
        let args = SearchArgs {
            zip: Some("98109".to_string()),
            city: Some("Seattle".to_string()),
            ..Default::default()
        };

        let query = build_query(&Settings::default(), &args);
        assert_eq!(query.get("City"), Some("Seattle"));
        assert_eq!(query.get("Zip_Code"), Some("98109"));
        assert_eq!(query.get("Inspection_Start"), Some(""));
    }
}
