//! Error types for the web2md library.
//!
//! The error taxonomy mirrors the two-tier acquisition strategy:
//!
//! * **Soft failures** (a negotiated-Markdown attempt hit a transport error,
//!   timed out, or returned the wrong content type) are *expected* control
//!   flow — the acquirer falls through to the next strategy. They never
//!   appear here; they are modelled as `None` inside the acquirer.
//!
//! * **Fatal failures** ([`Web2MdError`]) terminate the conversion: the
//!   final raw-HTML fetch failed, the URL was unusable, or output could not
//!   be written. These are returned as `Err(Web2MdError)` from the top-level
//!   `convert*` functions and produce no partial output.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the web2md library.
#[derive(Debug, Error)]
pub enum Web2MdError {
    /// The input string is not an HTTP/HTTPS URL.
    #[error("Invalid URL '{url}': only http:// and https:// addresses are supported")]
    InvalidUrl { url: String },

    /// The raw-HTML fallback fetch failed. The two negotiated-Markdown
    /// attempts are soft failures and never surface; once the HTML fetch
    /// fails too there is nothing left to convert.
    #[error("Failed to fetch '{url}': {reason}\nCheck the address and your internet connection.")]
    FetchFailed { url: String, reason: String },

    /// The raw-HTML fallback fetch exceeded the configured timeout.
    #[error("Fetch timed out after {secs}s for '{url}'\nIncrease --timeout.")]
    FetchTimeout { url: String, secs: u64 },

    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_display() {
        let e = Web2MdError::InvalidUrl {
            url: "ftp://example.com".into(),
        };
        assert!(e.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn fetch_timeout_display() {
        let e = Web2MdError::FetchTimeout {
            url: "https://example.com".into(),
            secs: 15,
        };
        let msg = e.to_string();
        assert!(msg.contains("15s"), "got: {msg}");
        assert!(msg.contains("example.com"));
    }

    #[test]
    fn fetch_failed_display() {
        let e = Web2MdError::FetchFailed {
            url: "https://example.com".into(),
            reason: "connection refused".into(),
        };
        assert!(e.to_string().contains("connection refused"));
    }
}
