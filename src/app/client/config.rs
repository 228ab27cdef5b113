//! Client configuration: account coordinates, derived endpoints, HTTP tuning
//!
//! [`Config`] is built once from CLI input and immutable afterwards; its
//! endpoints are always derived from the landscape host (or substituted as a
//! whole), never assembled by callers.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app::endpoints::Endpoints;
use crate::auth::Credentials;
use crate::constants::http;
use crate::errors::{ConfigResult, TransportError, TransportResult};

/// Resolved configuration for one client instance
#[derive(Debug, Clone)]
pub struct Config {
    account: String,
    landscape_host: String,
    endpoints: Endpoints,
    credentials: Credentials,
}

impl Config {
    /// Builds a configuration, deriving the endpoints from the landscape
    /// host. Fails with `ConfigError::InvalidHost` before any network call.
    pub fn new(account: &str, landscape_host: &str, credentials: Credentials) -> ConfigResult<Self> {
        let endpoints = Endpoints::for_landscape(landscape_host)?;
        Ok(Self {
            account: account.to_string(),
            landscape_host: landscape_host.to_string(),
            endpoints,
            credentials,
        })
    }

    /// Builds a configuration around substituted endpoints, for
    /// non-standard landscapes and tests. No landscape host is recorded.
    pub fn with_endpoints(account: &str, endpoints: Endpoints, credentials: Credentials) -> Self {
        Self {
            account: account.to_string(),
            landscape_host: String::new(),
            endpoints,
            credentials,
        }
    }

    /// Account the client is scoped to
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Landscape host the endpoints were derived from
    pub fn landscape_host(&self) -> &str {
        &self.landscape_host
    }

    /// Derived service endpoints
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Basic-auth credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl fmt::Display for Config {
    /// One-line summary with the password masked, one `*` per character
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Account={},LandscapeHost={},User={},Password={})",
            self.account,
            self.landscape_host,
            self.credentials.user(),
            self.credentials.masked_password()
        )
    }
}

/// HTTP transport tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout, covering the full body transfer
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Connection pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
    /// Maximum idle connections per host
    pub pool_max_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
            pool_idle_timeout: Some(http::POOL_IDLE_TIMEOUT),
            pool_max_per_host: http::POOL_MAX_PER_HOST,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the configured limits
    pub fn build_http_client(&self) -> TransportResult<Client> {
        let mut builder = Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(http::USER_AGENT)
            .pool_max_idle_per_host(self.pool_max_per_host);

        if let Some(idle_timeout) = self.pool_idle_timeout {
            builder = builder.pool_idle_timeout(idle_timeout);
        }

        builder.build().map_err(TransportError::Client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(
            "acme",
            "eu1.hana.ondemand.com",
            Credentials::new("ada", "s3cret"),
        )
        .unwrap()
    }

    #[test]
    fn test_config_derives_endpoints() {
        let config = test_config();
        assert_eq!(
            config.endpoints().access().as_str(),
            "https://logapi.eu1.hana.ondemand.com/log/api_basic/v1/logs/"
        );
        assert_eq!(
            config.endpoints().config().as_str(),
            "https://logconfig.eu1.hana.ondemand.com/log/api_basic/v1/logs/"
        );
    }

    #[test]
    fn test_config_rejects_bad_host() {
        let result = Config::new("acme", "not a host", Credentials::new("ada", "pw"));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_masks_password() {
        let rendered = test_config().to_string();
        assert_eq!(
            rendered,
            "(Account=acme,LandscapeHost=eu1.hana.ondemand.com,User=ada,Password=******)"
        );
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout, http::DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, http::CONNECT_TIMEOUT);
    }

    #[test]
    fn test_http_client_creation() {
        let config = ClientConfig::default();
        assert!(config.build_http_client().is_ok());
    }

    #[test]
    fn test_http_client_with_custom_timeouts() {
        let config = ClientConfig {
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(5),
            ..Default::default()
        };
        assert!(config.build_http_client().is_ok());
    }
}
