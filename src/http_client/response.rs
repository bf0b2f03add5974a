//! HTTP response wrapper.

use std::collections::HashMap;

use reqwest::{Response, StatusCode};

/// HTTP response with headers captured up front.
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    body: Response,
}

impl HttpResponse {
    pub(crate) fn new(status: StatusCode, headers: HashMap<String, String>, body: Response) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }

    /// Character set declared in the Content-Type header.
    pub fn encoding(&self) -> Option<String> {
        self.content_type().and_then(charset_from_content_type)
    }

    /// Turn a 4xx/5xx status into an error.
    pub fn error_for_status(self) -> Result<Self, reqwest::Error> {
        let Self {
            status,
            headers,
            body,
        } = self;
        let body = body.error_for_status()?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get response body as text, decoded with the declared charset.
    pub async fn text(self) -> Result<String, reqwest::Error> {
        self.body.text().await
    }
}

/// Parse the `charset` parameter out of a Content-Type value.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|charset| !charset.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_present() {
        assert_eq!(
            charset_from_content_type("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            charset_from_content_type("text/html;Charset=\"ISO-8859-1\""),
            Some("ISO-8859-1".to_string())
        );
    }

    #[test]
    fn charset_absent() {
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }
}
