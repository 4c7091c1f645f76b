//! Configuration types for web-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across calls and to map CLI flags onto it.

use crate::error::Web2MdError;
use crate::transport::Transport;
use std::fmt;
use std::sync::Arc;

/// Default per-attempt fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User-Agent sent on the negotiated-Markdown attempts.
pub const NEGOTIATION_USER_AGENT: &str = "web2md/0.3";

/// Browser-like User-Agent sent on the raw-HTML fallback fetch. Some sites
/// serve stripped-down or blocked pages to unknown agents.
pub const HTML_USER_AGENT: &str = "Mozilla/5.0 (compatible; web2md/0.3)";

/// Configuration for a single conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use web2md::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .api_key("cf-key")
///     .timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Bearer token for the credentialed negotiated-Markdown attempt
    /// (e.g. a Cloudflare "Markdown for Agents" API key). When absent the
    /// credentialed attempt is skipped entirely and acquisition starts with
    /// the anonymous negotiation.
    pub api_key: Option<String>,

    /// Per-attempt fetch timeout in seconds. Default: 15.
    ///
    /// Applies independently to each of the up-to-three attempts; a slow
    /// negotiating server therefore delays the fallback by at most this much.
    pub timeout_secs: u64,

    /// Override the User-Agent used on the raw-HTML fetch.
    pub user_agent: Option<String>,

    /// Pre-constructed transport. Takes precedence over the built-in
    /// `reqwest` transport; used by tests to stub the network.
    pub transport: Option<Arc<dyn Transport>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            transport: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("transport", &self.transport.as_ref().map(|_| "<dyn Transport>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Effective User-Agent for the raw-HTML fetch.
    pub fn html_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(HTML_USER_AGENT)
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.config.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = Some(ua.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.transport = Some(transport);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Web2MdError> {
        if self.config.timeout_secs == 0 {
            return Err(Web2MdError::InvalidConfig(
                "timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let c = ConversionConfig::builder().build().unwrap();
        assert_eq!(c.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(c.api_key.is_none());
        assert_eq!(c.html_user_agent(), HTML_USER_AGENT);
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let err = ConversionConfig::builder().timeout_secs(0).build();
        assert!(err.is_err());
    }

    #[test]
    fn empty_api_key_treated_as_absent() {
        let c = ConversionConfig::builder().api_key("").build().unwrap();
        assert!(c.api_key.is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let c = ConversionConfig::builder().api_key("secret").build().unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
