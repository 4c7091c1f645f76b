//! HTTP transport abstraction.
//!
//! The acquirer never talks to `reqwest` directly; it goes through the
//! [`Transport`] trait so tests can inject a stub and exercise the full
//! strategy chain without a network. Production code uses [`HttpTransport`],
//! a thin wrapper over a shared `reqwest::Client`.

use crate::error::Web2MdError;
use async_trait::async_trait;
use std::time::Duration;

/// A single outgoing request. Headers are plain pairs so stubs do not need
/// to depend on any HTTP types.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub timeout: Duration,
}

impl TransportRequest {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// A completed response: the declared content type (if any) and the raw body.
/// Status handling stays in the transport — a non-2xx status is reported as
/// a [`TransportError`] so the acquirer only ever sees usable bodies.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// True when the server declared a Markdown representation.
    pub fn is_markdown(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("markdown"))
    }
}

/// Transport-level failure. Timeouts are distinguished because the caller
/// maps them to a dedicated fatal error on the final fetch.
#[derive(Debug, Clone)]
pub enum TransportError {
    Timeout,
    Other(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "timed out"),
            TransportError::Other(reason) => write!(f, "{reason}"),
        }
    }
}

/// Minimal fetch interface the acquirer depends on.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Web2MdError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Web2MdError::Internal(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.get(&request.url).timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Other(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(TransportError::Other(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Other(e.to_string())
                }
            })?
            .to_vec();

        Ok(TransportResponse { content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_content_type_detection() {
        let resp = TransportResponse {
            content_type: Some("text/markdown; charset=utf-8".into()),
            body: vec![],
        };
        assert!(resp.is_markdown());

        let resp = TransportResponse {
            content_type: Some("text/html".into()),
            body: vec![],
        };
        assert!(!resp.is_markdown());

        let resp = TransportResponse {
            content_type: None,
            body: vec![],
        };
        assert!(!resp.is_markdown());
    }

    #[test]
    fn request_builder_collects_headers() {
        let req = TransportRequest::new("https://example.com", 15)
            .header("Accept", "text/markdown")
            .header("Authorization", "Bearer k");
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.timeout, Duration::from_secs(15));
    }
}
