//! # web2md
//!
//! Fetch a web page and convert it to clean Markdown.
//!
//! ## Why this crate?
//!
//! Feeding documentation pages to downstream tools needs stable, readable
//! Markdown, not raw HTML. Some CDNs will hand you a Markdown representation
//! directly if you ask for it; everyone else serves HTML of wildly varying
//! quality. This crate tries the cheap path first and falls back to a
//! deterministic, order-sensitive sequence of lexical conversion passes —
//! deliberately *not* a structural HTML parser. Best-effort conversion of
//! malformed markup beats rejecting it.
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL
//!  │
//!  ├─ 1. Acquire    negotiate `Accept: text/markdown` (with, then without
//!  │                credentials); fall back to a raw HTML fetch
//!  ├─ 2. Strip      delete scripts, styles, nav/footer/header chrome
//!  ├─ 3. Extract    isolate <main> / <article> / role="main" / <body>
//!  ├─ 4. Convert    ordered regex passes: headings, code, links, images,
//!  │                emphasis, lists, quotes, tables, residual tags, entities
//!  └─ 5. Normalize  collapse blank lines, trim whitespace
//! ```
//!
//! Steps 2–5 run only when negotiation fails; a negotiated Markdown body is
//! returned verbatim.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use web2md::{convert, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .api_key(std::env::var("CLOUDFLARE_API_KEY").unwrap_or_default())
//!         .build()?;
//!     let output = convert("https://example.com/docs/intro", &config).await?;
//!     println!("{}", output.markdown);
//!     eprintln!("via {} ({} bytes)", output.strategy, output.stats.markdown_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Known limitations
//!
//! The conversion is lexical. Content that nests the literal closing tag of
//! its own container, or deeply nested inline formatting, converts
//! imperfectly by design — a full DOM parser is a different, much larger
//! system. The table pass emits pipe-delimited rows without a header
//! separator row.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `web2md` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod transport;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_TIMEOUT_SECS};
pub use convert::{convert, convert_sync, convert_to_file};
pub use error::Web2MdError;
pub use output::{ConversionOutput, ConversionStats, FetchStrategy};
pub use pipeline::html_to_markdown;
pub use transport::{Transport, TransportError, TransportRequest, TransportResponse};
