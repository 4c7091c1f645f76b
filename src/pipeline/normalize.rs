//! Whitespace normalisation: the final cleanup after the substitution passes.
//!
//! The block passes pad their output generously with newlines so that
//! adjacent constructs cannot fuse; this stage collapses the excess. It is
//! idempotent — running it on already-normalised text is a no-op — which the
//! tests assert directly.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static RE_TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").unwrap());
static RE_LEADING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]+").unwrap());

/// Strip horizontal whitespace around newlines, collapse blank-line runs to
/// one blank line, and trim the whole result.
///
/// The whitespace strip must run before the collapse: a whitespace-only line
/// hides a newline run from `\n{3,}`, and stripping it afterwards would
/// manufacture a fresh run the collapse never saw.
pub fn normalize(input: &str) -> String {
    let text = RE_TRAILING_WS.replace_all(input, "\n");
    let text = RE_LEADING_WS.replace_all(&text, "\n");
    let text = RE_BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn whitespace_only_lines_collapse_too() {
        // Lines of spaces/tabs must not shield a newline run from the
        // collapse; the output may never contain more than one blank line.
        assert_eq!(normalize("a\n  \n  \n  \nb"), "a\n\nb");
        assert_eq!(normalize("a\n\t\n \t \n\nb"), "a\n\nb");
    }

    #[test]
    fn strips_horizontal_whitespace_around_newlines() {
        assert_eq!(normalize("a   \nb"), "a\nb");
        assert_eq!(normalize("a\n   b"), "a\nb");
        assert_eq!(normalize("a \t \n \t b"), "a\nb");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(normalize("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "a\n\n\n\nb   \n   c",
            "a\n  \n  \n  \nb",
            "a \n\t\n \nb",
            "",
            "   ",
            "# Title\n\nbody text\n",
            "already\n\nclean",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }
}
