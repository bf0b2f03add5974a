//! King County food establishment inspection search.
//!
//! Issues the search and hands back the raw results page. Parsing and
//! extraction live in [`crate::extract`].

mod query;

pub use query::{parse_date, SearchQuery, BASE_PARAMS, DATE_FORMAT};

use thiserror::Error;
use tracing::info;

use crate::http_client::HttpClient;

/// Search results endpoint.
pub const INSPECTION_ENDPOINT: &str =
    "http://info.kingcounty.gov/health/ehs/foodsafety/inspections/Results.aspx";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A fetched results page.
#[derive(Debug, Clone)]
pub struct InspectionPage {
    pub text: String,
    /// Charset the server declared, if any.
    pub encoding: Option<String>,
}

/// Run a search and return the results page.
///
/// A non-success status is an error.
pub async fn fetch_inspection_page(
    client: &HttpClient,
    endpoint: &str,
    query: &SearchQuery,
) -> Result<InspectionPage, SearchError> {
    let url = query.to_url(endpoint)?;
    info!("Fetching inspection results from {}", url);

    let response = client.get(&url).await?.error_for_status()?;
    let encoding = response.encoding();
    let text = response.text().await?;

    info!("Fetched {} bytes", text.len());
    Ok(InspectionPage { text, encoding })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned response on a local port and return the endpoint URL.
    async fn serve_once(status: &'static str, content_type: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                content_type,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.expect("head");
            socket.write_all(body).await.expect("body");
            socket.shutdown().await.ok();
        });
        format!("http://{}/Results.aspx", addr)
    }

    fn client() -> HttpClient {
        HttpClient::builder(Duration::from_secs(5))
            .build()
            .expect("client")
    }

    #[tokio::test]
    async fn decodes_page_with_declared_charset() {
        let endpoint = serve_once(
            "200 OK",
            "text/html; charset=iso-8859-1",
            b"<html>caf\xe9</html>",
        )
        .await;

        let page = fetch_inspection_page(&client(), &endpoint, &SearchQuery::sample())
            .await
            .expect("page");
        assert_eq!(page.encoding.as_deref(), Some("iso-8859-1"));
        assert_eq!(page.text, "<html>caf\u{e9}</html>");
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let endpoint = serve_once("503 Service Unavailable", "text/html", b"down").await;

        let err = fetch_inspection_page(&client(), &endpoint, &SearchQuery::sample())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
    }
}
