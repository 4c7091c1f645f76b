//! Output types returned by the `convert*` functions.

use serde::{Deserialize, Serialize};

/// Which acquisition strategy produced the Markdown.
///
/// Reported as a diagnostic label alongside the payload; the strategies are
/// tried strictly in the order they are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchStrategy {
    /// Content-negotiated `text/markdown` fetch with a bearer credential.
    NegotiatedWithCredentials,
    /// Content-negotiated `text/markdown` fetch without credentials.
    NegotiatedNoCredentials,
    /// Raw HTML fetched and converted through the lexical pipeline.
    ConvertedFromHtml,
}

impl FetchStrategy {
    /// Stable diagnostic label for logs and `--json` output.
    pub fn label(&self) -> &'static str {
        match self {
            FetchStrategy::NegotiatedWithCredentials => "negotiated-with-credentials",
            FetchStrategy::NegotiatedNoCredentials => "negotiated-no-credentials",
            FetchStrategy::ConvertedFromHtml => "converted-from-html",
        }
    }
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Final Markdown text, including the two `<!-- Source/Fetched -->`
    /// metadata comment lines.
    pub markdown: String,
    /// The acquisition strategy that produced the payload.
    pub strategy: FetchStrategy,
    /// Timing and size statistics for caller-side logging.
    pub stats: ConversionStats,
}

/// Statistics about a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Source address the page was fetched from.
    pub source_url: String,
    /// Byte length of the produced Markdown (header included).
    pub markdown_bytes: usize,
    /// Wall-clock duration of the whole conversion in milliseconds.
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_labels() {
        assert_eq!(
            FetchStrategy::NegotiatedWithCredentials.label(),
            "negotiated-with-credentials"
        );
        assert_eq!(
            FetchStrategy::NegotiatedNoCredentials.label(),
            "negotiated-no-credentials"
        );
        assert_eq!(FetchStrategy::ConvertedFromHtml.label(), "converted-from-html");
    }

    #[test]
    fn strategy_serialises_as_kebab_case() {
        let json = serde_json::to_string(&FetchStrategy::ConvertedFromHtml).unwrap();
        assert_eq!(json, "\"converted-from-html\"");
    }
}
