//! Top-level conversion entry points.
//!
//! [`convert`] is the primary API: fetch, convert when needed, prepend the
//! source/timestamp header, and return the Markdown plus diagnostics.
//! [`convert_to_file`] adds an atomic write; [`convert_sync`] wraps the async
//! path for blocking callers.

use crate::config::ConversionConfig;
use crate::error::Web2MdError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::acquire;
use crate::transport::{HttpTransport, Transport};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Convert a web page to Markdown.
///
/// # Arguments
/// * `url` — HTTP/HTTPS address of the page
/// * `config` — Conversion configuration
///
/// # Errors
/// Returns `Err(Web2MdError)` only for fatal failures: an unusable URL or a
/// failed raw-HTML fetch. Failed negotiation attempts are recovered
/// internally and never surface.
///
/// # Example
/// ```rust,no_run
/// use web2md::{convert, ConversionConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ConversionConfig::default();
///     let output = convert("https://example.com/docs", &config).await?;
///     println!("{}", output.markdown);
///     eprintln!("strategy: {}", output.strategy);
///     Ok(())
/// }
/// ```
pub async fn convert(
    url: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Web2MdError> {
    let start = Instant::now();
    let url = url.as_ref();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Web2MdError::InvalidUrl {
            url: url.to_string(),
        });
    }

    info!("Starting conversion: {url}");

    let transport: Arc<dyn Transport> = match &config.transport {
        Some(t) => Arc::clone(t),
        None => Arc::new(HttpTransport::new()?),
    };

    let outcome = acquire::acquire(url, config, &transport).await?;

    let fetched_at = chrono::Local::now().format("%Y-%m-%d %H:%M");
    let markdown = format!(
        "<!-- Source: {url} -->\n<!-- Fetched: {fetched_at} -->\n\n{}",
        outcome.markdown
    );

    let stats = ConversionStats {
        source_url: url.to_string(),
        markdown_bytes: markdown.len(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete via {}: {} bytes in {}ms",
        outcome.strategy, stats.markdown_bytes, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        markdown,
        strategy: outcome.strategy,
        stats,
    })
}

/// Convert a web page and write the Markdown directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files; parent
/// directories are created as needed. A fatal fetch failure writes nothing.
pub async fn convert_to_file(
    url: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Web2MdError> {
    let output = convert(url, config).await?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Web2MdError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("md.tmp");
    tokio::fs::write(&tmp_path, &output.markdown)
        .await
        .map_err(|e| Web2MdError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Web2MdError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(output)
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    url: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Web2MdError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Web2MdError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(convert(url, config))
}
