//! Content extraction: isolate the substring most likely to be the page's
//! primary content.
//!
//! Candidates are tried in priority order — `<main>`, `<article>`, then any
//! element carrying `role="main"` — and the inner content of the *first
//! textual match* wins. There is no balanced-tag parse: a document whose
//! main content itself contains the literal closing sequence of the matched
//! tag will truncate early. That is the documented cost of staying lexical.
//!
//! Falls back to `<body>`, and finally to the whole input unchanged, so the
//! extractor never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_MAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<main[^>]*>(.*?)</main>").unwrap());
static RE_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<article[^>]*>(.*?)</article>").unwrap());
static RE_ROLE_MAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<div[^>]*role=["']main["'][^>]*>(.*?)</div>"#).unwrap());
static RE_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());

/// Return the inner content of the best main-content candidate, or the
/// whole input when no candidate matches.
pub fn extract_main_content(html: &str) -> String {
    for re in [&*RE_MAIN, &*RE_ARTICLE, &*RE_ROLE_MAIN] {
        if let Some(caps) = re.captures(html) {
            return caps[1].to_string();
        }
    }
    if let Some(caps) = RE_BODY.captures(html) {
        return caps[1].to_string();
    }
    html.to_string()
}
