//! Block conversion: the ordered lexical passes that turn HTML constructs
//! into Markdown syntax.
//!
//! ## Pass order is load-bearing
//!
//! Each pass is a pure `&str → String` substitution over the whole text, and
//! later passes assume earlier constructs are already resolved:
//!
//! - `<pre>` blocks must convert before inline `<code>` and before the
//!   residual-tag strip, or their contents would be mangled;
//! - the alt-aware image pattern must run before the src-only one, or alt
//!   text would be lost to the shorter pattern;
//! - `thead`/`tbody` tags must go before `<th>` is matched, because the
//!   `<th[^>]*>` pattern would otherwise swallow `<thead>`;
//! - entity decoding runs dead last, after the residual-tag strip, so
//!   entities inside discarded attribute values never leak.
//!
//! Headings are processed level 6 down to 1 so the shorter `<h1>` pattern
//! cannot fire inside a longer one. Unmatched patterns are no-ops: malformed
//! input degrades, it never errors.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::entities::decode_entities;

/// Apply all conversion passes in order.
pub fn convert_blocks(input: &str) -> String {
    let s = convert_headings(input);
    let s = convert_code_blocks(&s);
    let s = convert_inline_code(&s);
    let s = convert_links(&s);
    let s = convert_images(&s);
    let s = convert_emphasis(&s);
    let s = convert_list_items(&s);
    let s = convert_blockquotes(&s);
    let s = convert_breaks(&s);
    let s = convert_tables(&s);
    let s = strip_residual_tags(&s);
    decode_entities(&s)
}

// ── Pass 1: Headings (h6 → h1) ───────────────────────────────────────────

static RE_HEADINGS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let re = Regex::new(&format!(r"(?is)<h{level}[^>]*>(.*?)</h{level}>"))
                .unwrap_or_else(|e| panic!("h{level} pattern: {e}"));
            (level, re)
        })
        .collect()
});

fn convert_headings(input: &str) -> String {
    let mut text = input.to_string();
    for (level, re) in RE_HEADINGS.iter() {
        text = re
            .replace_all(&text, |caps: &Captures<'_>| {
                format!("\n\n{} {}\n\n", "#".repeat(*level), caps[1].trim())
            })
            .to_string();
    }
    text
}

// ── Pass 2: Preformatted code blocks ─────────────────────────────────────

static RE_PRE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").unwrap());
static RE_LANG_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="[^"]*(?:language|lang)-(\w+)"#).unwrap());
static RE_INNER_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<code[^>]*>(.*?)</code>").unwrap());
static RE_ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

fn convert_code_blocks(input: &str) -> String {
    RE_PRE
        .replace_all(input, |caps: &Captures<'_>| {
            let block = &caps[1];
            let lang = RE_LANG_CLASS
                .captures(block)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            // Prefer the nested <code> element's text; fall back to the
            // whole <pre> contents when there is none.
            let content = RE_INNER_CODE
                .captures(block)
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| block.to_string());
            let content = decode_entities(&RE_ANY_TAG.replace_all(&content, ""));
            format!("\n\n```{lang}\n{}\n```\n\n", content.trim())
        })
        .to_string()
}

// ── Pass 3: Inline code ──────────────────────────────────────────────────

fn convert_inline_code(input: &str) -> String {
    // Entities inside inline code are decoded by the global final pass.
    RE_INNER_CODE.replace_all(input, "`${1}`").to_string()
}

// ── Pass 4: Links ────────────────────────────────────────────────────────

static RE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap());

fn convert_links(input: &str) -> String {
    RE_LINK.replace_all(input, "[${2}](${1})").to_string()
}

// ── Pass 5: Images ───────────────────────────────────────────────────────

static RE_IMG_SRC_ALT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]*src="([^"]*)"[^>]*alt="([^"]*)"[^>]*/?>"#).unwrap());
static RE_IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]*src="([^"]*)"[^>]*/?>"#).unwrap());

fn convert_images(input: &str) -> String {
    // src+alt first: the src-only pattern also matches those tags and would
    // drop the alt text.
    let text = RE_IMG_SRC_ALT.replace_all(input, "![${2}](${1})");
    RE_IMG_SRC.replace_all(&text, "![](${1})").to_string()
}

// ── Pass 6: Emphasis ─────────────────────────────────────────────────────

static RE_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:strong|b)[^>]*>(.*?)</(?:strong|b)>").unwrap());
static RE_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:em|i)[^>]*>(.*?)</(?:em|i)>").unwrap());

fn convert_emphasis(input: &str) -> String {
    let text = RE_BOLD.replace_all(input, "**${1}**");
    RE_ITALIC.replace_all(&text, "*${1}*").to_string()
}

// ── Pass 7: List items ───────────────────────────────────────────────────

static RE_LI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap());

fn convert_list_items(input: &str) -> String {
    // <ul>/<ol> containers are left for the residual-tag strip; the dash
    // lines emitted here are all Markdown needs.
    RE_LI.replace_all(input, "\n- ${1}").to_string()
}

// ── Pass 8: Blockquotes ──────────────────────────────────────────────────

static RE_BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<blockquote[^>]*>(.*?)</blockquote>").unwrap());

fn convert_blockquotes(input: &str) -> String {
    RE_BLOCKQUOTE
        .replace_all(input, |caps: &Captures<'_>| {
            let quoted = caps[1]
                .trim()
                .split('\n')
                .map(|line| format!("> {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n{quoted}\n")
        })
        .to_string()
}

// ── Pass 9: Line breaks, paragraphs, rules ───────────────────────────────

static RE_BR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RE_P: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap());
static RE_HR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<hr[^>]*/?>").unwrap());

fn convert_breaks(input: &str) -> String {
    let text = RE_BR.replace_all(input, "\n");
    let text = RE_P.replace_all(&text, "\n\n${1}\n\n");
    RE_HR.replace_all(&text, "\n\n---\n\n").to_string()
}

// ── Pass 10: Tables ──────────────────────────────────────────────────────
//
// Cells become `| text ` and rows gain a trailing `|`, producing a
// pipe-delimited block without a header separator row. A GFM renderer
// needs the separator, but the source format does not always distinguish
// header rows, so the block is emitted as a plain approximation.

static RE_THEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?thead[^>]*>").unwrap());
static RE_TBODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?tbody[^>]*>").unwrap());
static RE_TH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<th[^>]*>(.*?)</th>").unwrap());
static RE_TD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap());
static RE_TR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap());
static RE_TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?table[^>]*>").unwrap());

fn convert_tables(input: &str) -> String {
    // Section tags first: <th[^>]*> would otherwise swallow <thead>.
    let text = RE_THEAD.replace_all(input, "");
    let text = RE_TBODY.replace_all(&text, "");
    let text = RE_TH.replace_all(&text, "| ${1} ");
    let text = RE_TD.replace_all(&text, "| ${1} ");
    let text = RE_TR.replace_all(&text, "${1}|\n");
    RE_TABLE.replace_all(&text, "\n").to_string()
}

// ── Pass 11: Residual-tag strip ──────────────────────────────────────────

fn strip_residual_tags(input: &str) -> String {
    RE_ANY_TAG.replace_all(input, "").to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────
