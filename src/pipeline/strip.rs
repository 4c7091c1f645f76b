//! Tag stripping: delete whole elements that are never content.
//!
//! Scripts, styles, navigation chrome, and embedded vector/frame content are
//! removed open-tag-through-close-tag *before* content extraction, so that a
//! `<main>` inside a site's navigation template can never shadow the real
//! article body. HTML comments are deleted here too.
//!
//! Like every stage in this pipeline the removal is lexical: each element is
//! matched non-greedily up to its first closing tag, so a literal `</script>`
//! inside a string constant truncates that script early. Accepted limitation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose entire contents are chrome or machinery, never prose.
const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "svg", "iframe",
];

static RE_STRIPPED: Lazy<Vec<Regex>> = Lazy::new(|| {
    STRIPPED_TAGS
        .iter()
        .map(|tag| {
            // `[\s>]` after the name keeps `<header>` from matching `<headers>`.
            Regex::new(&format!(r"(?is)<{tag}[\s>].*?</{tag}>"))
                .unwrap_or_else(|e| panic!("strip pattern for <{tag}>: {e}"))
        })
        .collect()
});

static RE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Remove all non-content elements (and their contents) plus HTML comments.
pub fn strip_chrome(input: &str) -> String {
    let mut text = input.to_string();
    for re in RE_STRIPPED.iter() {
        text = re.replace_all(&text, "").to_string();
    }
    RE_COMMENT.replace_all(&text, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_with_contents() {
        let html = "before<script type=\"text/javascript\">var x = 1;</script>after";
        assert_eq!(strip_chrome(html), "beforeafter");
    }

    #[test]
    fn removes_multiline_style() {
        let html = "a<style>\nbody {\n  color: red;\n}\n</style>b";
        assert_eq!(strip_chrome(html), "ab");
    }

    #[test]
    fn case_insensitive() {
        let html = "x<SCRIPT>alert(1)</SCRIPT>y<Nav>menu</Nav>z";
        assert_eq!(strip_chrome(html), "xyz");
    }

    #[test]
    fn removes_all_chrome_kinds() {
        let html = "<nav>n</nav><header>h</header><footer>f</footer>\
                    <aside>a</aside><noscript>ns</noscript><svg><path/></svg>\
                    <iframe src=\"x\">i</iframe>keep";
        assert_eq!(strip_chrome(html), "keep");
    }

    #[test]
    fn removes_comments() {
        let html = "a<!-- hidden\nnote -->b";
        assert_eq!(strip_chrome(html), "ab");
    }

    #[test]
    fn leaves_content_elements_alone() {
        let html = "<p>hello</p>";
        assert_eq!(strip_chrome(html), html);
    }

    #[test]
    fn tag_name_requires_boundary() {
        // <headline> must not be eaten by the <header> rule.
        let html = "<headline>news</headline>";
        assert_eq!(strip_chrome(html), html);
    }
}
