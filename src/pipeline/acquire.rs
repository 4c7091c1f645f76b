//! Source acquisition: the two-tier fetch strategy.
//!
//! ## Strategy order
//!
//! 1. Content-negotiated Markdown fetch *with* credentials (skipped when no
//!    API key is configured). Some CDNs serve a Markdown representation of a
//!    page when asked via `Accept: text/markdown`.
//! 2. The same negotiated fetch without credentials — some sites honour the
//!    header natively.
//! 3. Raw HTML fetch, converted through the lexical pipeline.
//!
//! The attempts run strictly in sequence: a negotiated success short-circuits
//! the more expensive HTML conversion. Failures in steps 1–2 (transport
//! error, timeout, or a non-Markdown content type) are soft: logged at debug
//! level and recovered by falling through. A failure in step 3 is fatal —
//! there is no strategy left.

use crate::config::{ConversionConfig, NEGOTIATION_USER_AGENT};
use crate::error::Web2MdError;
use crate::output::FetchStrategy;
use crate::transport::{Transport, TransportError, TransportRequest};
use std::sync::Arc;
use tracing::{debug, info};

use super::html_to_markdown;

/// Markdown payload plus the strategy that produced it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub markdown: String,
    pub strategy: FetchStrategy,
}

/// Run the strategy chain until one attempt yields Markdown.
pub async fn acquire(
    url: &str,
    config: &ConversionConfig,
    transport: &Arc<dyn Transport>,
) -> Result<FetchOutcome, Web2MdError> {
    if config.api_key.is_some() {
        if let Some(markdown) =
            try_negotiated(url, config, transport, config.api_key.as_deref()).await
        {
            info!("negotiated Markdown with credentials ({} bytes)", markdown.len());
            return Ok(FetchOutcome {
                markdown,
                strategy: FetchStrategy::NegotiatedWithCredentials,
            });
        }
    }

    if let Some(markdown) = try_negotiated(url, config, transport, None).await {
        info!("negotiated Markdown without credentials ({} bytes)", markdown.len());
        return Ok(FetchOutcome {
            markdown,
            strategy: FetchStrategy::NegotiatedNoCredentials,
        });
    }

    let html = fetch_html(url, config, transport).await?;
    let markdown = html_to_markdown(&html);
    info!("converted HTML to Markdown ({} bytes)", markdown.len());
    Ok(FetchOutcome {
        markdown,
        strategy: FetchStrategy::ConvertedFromHtml,
    })
}

/// One negotiated-Markdown attempt. Every failure mode is soft: the caller
/// falls through to the next strategy.
async fn try_negotiated(
    url: &str,
    config: &ConversionConfig,
    transport: &Arc<dyn Transport>,
    api_key: Option<&str>,
) -> Option<String> {
    let mut request = TransportRequest::new(url, config.timeout_secs)
        .header("Accept", "text/markdown")
        .header("User-Agent", NEGOTIATION_USER_AGENT);
    if let Some(key) = api_key {
        request = request.header("Authorization", format!("Bearer {key}"));
    }

    match transport.fetch(request).await {
        Ok(response) if response.is_markdown() => {
            Some(String::from_utf8_lossy(&response.body).into_owned())
        }
        Ok(response) => {
            debug!(
                "negotiation declined: content type {:?}",
                response.content_type
            );
            None
        }
        Err(e) => {
            debug!("negotiation attempt failed: {e}");
            None
        }
    }
}

/// The raw-HTML fallback fetch. Transport failure here is fatal. Bytes are
/// decoded with replacement so the pipeline always receives valid text.
async fn fetch_html(
    url: &str,
    config: &ConversionConfig,
    transport: &Arc<dyn Transport>,
) -> Result<String, Web2MdError> {
    let request = TransportRequest::new(url, config.timeout_secs)
        .header("User-Agent", config.html_user_agent().to_string())
        .header("Accept", "text/html,application/xhtml+xml");

    let response = transport.fetch(request).await.map_err(|e| match e {
        TransportError::Timeout => Web2MdError::FetchTimeout {
            url: url.to_string(),
            secs: config.timeout_secs,
        },
        TransportError::Other(reason) => Web2MdError::FetchFailed {
            url: url.to_string(),
            reason,
        },
    })?;

    Ok(String::from_utf8_lossy(&response.body).into_owned())
}
