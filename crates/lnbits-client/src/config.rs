//! Configuration for connecting to an LNbits instance.

use std::env;

/// SOCKS5 proxy address used for Tor connectivity when the host is a
/// hidden service.
pub const TOR_SOCKS5_PROXY: &str = "socks5h://0.0.0.0:9050";

/// Configuration for connecting to an LNbits instance.
#[derive(Debug, Clone, Default)]
pub struct LnbitsConfig {
    /// Base URL of the LNbits instance (e.g., "https://legend.lnbits.com").
    pub host: String,
    /// Read-only API key, sent as `X-Api-Key` on every request.
    pub read_key: String,
    /// Webhook URL that LNbits will notify when an invoice is paid.
    /// Forwarded on invoice creation; not consumed by this client.
    pub webhook: String,
}

impl LnbitsConfig {
    /// Create a configuration for the given host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the read-only API key.
    pub fn with_read_key(mut self, read_key: impl Into<String>) -> Self {
        self.read_key = read_key.into();
        self
    }

    /// Set the webhook URL forwarded on invoice creation.
    pub fn with_webhook(mut self, webhook: impl Into<String>) -> Self {
        self.webhook = webhook.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LNBITS_HOST` | Base URL of the LNbits instance | (empty) |
    /// | `LNBITS_READ_KEY` | Read-only API key | (empty) |
    /// | `LNBITS_WEBHOOK` | Webhook URL for paid invoices | (empty) |
    pub fn from_env() -> Self {
        Self {
            host: env::var("LNBITS_HOST").unwrap_or_default(),
            read_key: env::var("LNBITS_READ_KEY").unwrap_or_default(),
            webhook: env::var("LNBITS_WEBHOOK").unwrap_or_default(),
        }
    }

    /// Get the wallet API base URL.
    pub fn wallet_api_url(&self) -> String {
        format!("{}/api/v1", self.host)
    }

    /// Get the LNURL-pay extension API base URL.
    pub fn lnurl_api_url(&self) -> String {
        format!("{}/lnurlp/api/v1", self.host)
    }

    /// SOCKS5 proxy to route through, if the host requires one.
    ///
    /// Tor hidden services cannot be reached over direct TCP/TLS, so a
    /// `.onion` host yields the local Tor proxy for both http and https.
    pub fn socks5_proxy(&self) -> Option<&'static str> {
        if self.host.contains(".onion") {
            Some(TOR_SOCKS5_PROXY)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_derivation() {
        let config = LnbitsConfig::new("https://legend.lnbits.com");

        assert_eq!(config.wallet_api_url(), "https://legend.lnbits.com/api/v1");
        assert_eq!(
            config.lnurl_api_url(),
            "https://legend.lnbits.com/lnurlp/api/v1"
        );
    }

    #[test]
    fn test_onion_host_routes_through_tor() {
        let config = LnbitsConfig::new("http://lnbitsabcdef.onion");
        assert_eq!(config.socks5_proxy(), Some(TOR_SOCKS5_PROXY));
    }

    #[test]
    fn test_clearnet_host_has_no_proxy() {
        let config = LnbitsConfig::new("https://legend.lnbits.com");
        assert!(config.socks5_proxy().is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = LnbitsConfig::new("https://ln.example.org")
            .with_read_key("abc123")
            .with_webhook("https://example.org/hook");

        assert_eq!(config.host, "https://ln.example.org");
        assert_eq!(config.read_key, "abc123");
        assert_eq!(config.webhook, "https://example.org/hook");
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_lnbits_vars() {
            std::env::remove_var("LNBITS_HOST");
            std::env::remove_var("LNBITS_READ_KEY");
            std::env::remove_var("LNBITS_WEBHOOK");
        }

        // Scenario 1: nothing set, everything defaults to empty
        clear_all_lnbits_vars();
        let config = LnbitsConfig::from_env();
        assert!(config.host.is_empty());
        assert!(config.read_key.is_empty());
        assert!(config.webhook.is_empty());
        assert!(config.socks5_proxy().is_none());

        // Scenario 2: all vars set
        std::env::set_var("LNBITS_HOST", "https://ln.example.org");
        std::env::set_var("LNBITS_READ_KEY", "env-read-key");
        std::env::set_var("LNBITS_WEBHOOK", "https://example.org/paid");

        let config = LnbitsConfig::from_env();
        assert_eq!(config.host, "https://ln.example.org");
        assert_eq!(config.read_key, "env-read-key");
        assert_eq!(config.webhook, "https://example.org/paid");

        // Scenario 3: onion host picks up the Tor proxy
        std::env::set_var("LNBITS_HOST", "http://lnbitsabcdef.onion");
        let config = LnbitsConfig::from_env();
        assert_eq!(config.socks5_proxy(), Some(TOR_SOCKS5_PROXY));

        // Cleanup
        clear_all_lnbits_vars();
    }
}
