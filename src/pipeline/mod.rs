//! Pipeline stages for web-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable; all of them except
//! [`acquire`] are pure text transforms with no I/O.
//!
//! ## Data Flow
//!
//! ```text
//! url ──▶ acquire ──▶ strip ──▶ extract ──▶ blocks ──▶ normalize
//!         (fetch)     (chrome)  (main/      (ordered   (whitespace)
//!                               article)    passes)
//! ```
//!
//! 1. [`acquire`]   — run the two-tier fetch strategy; only stage with
//!    network I/O. A negotiated-Markdown hit skips the rest of the chain.
//! 2. [`strip`]     — delete scripts, styles, and navigation chrome so the
//!    extraction step never matches a `<main>` buried in a template.
//! 3. [`extract`]   — isolate the primary content region.
//! 4. [`blocks`]    — the ordered lexical substitution passes (with
//!    [`entities`] decoding as the final pass).
//! 5. [`normalize`] — collapse the whitespace the substitutions left behind.

pub mod acquire;
pub mod blocks;
pub mod entities;
pub mod extract;
pub mod normalize;
pub mod strip;

/// Run the full HTML-to-Markdown conversion chain on already-fetched markup.
///
/// This is the path taken when content negotiation fails; it is exposed so
/// callers with HTML already in hand can convert without a fetch.
pub fn html_to_markdown(html: &str) -> String {
    let text = strip::strip_chrome(html);
    let text = extract::extract_main_content(&text);
    let text = blocks::convert_blocks(&text);
    normalize::normalize(&text)
}
