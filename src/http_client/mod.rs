//! HTTP client used to query the inspection search.

mod response;

pub use response::{charset_from_content_type, HttpResponse};

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Default user agent.
pub const USER_AGENT: &str = concat!("foodsafety/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest::Client` with the crate's defaults applied.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

fn extract_response_headers(response: &Response) -> HashMap<String, String> {
    response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect()
}

/// Builder for constructing an `HttpClient`.
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Set the user agent string. Without this, [`USER_AGENT`] is used.
    pub fn user_agent(mut self, ua: &str) -> Self {
        self.user_agent = Some(ua.to_string());
        self
    }

    /// Build the `HttpClient`.
    pub fn build(self) -> Result<HttpClient, reqwest::Error> {
        let user_agent = self.user_agent.as_deref().unwrap_or(USER_AGENT);
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(HttpClient { client })
    }
}

impl HttpClient {
    pub fn builder(timeout: Duration) -> HttpClientBuilder {
        HttpClientBuilder {
            timeout,
            user_agent: None,
        }
    }

    /// Issue a GET request. Non-success statuses are returned, not raised.
    pub async fn get(&self, url: &Url) -> Result<HttpResponse, reqwest::Error> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let headers = extract_response_headers(&response);
        debug!("GET {} -> {}", url, status);
        Ok(HttpResponse::new(status, headers, response))
    }
}
