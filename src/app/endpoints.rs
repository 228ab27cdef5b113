//! Endpoint derivation for landscape hosts
//!
//! A landscape host such as `eu1.hana.ondemand.com` yields two service
//! bases: the access endpoint (`logapi.` subdomain) used for listing and
//! download, and the config endpoint (`logconfig.` subdomain) used for log
//! administration. Request URLs are built by appending path segments to the
//! access base, with each segment percent-encoded.

use url::Url;

use crate::constants::endpoints;
use crate::errors::{ConfigError, ConfigResult};

/// Service base URLs derived from a landscape host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    access: Url,
    config: Url,
}

impl Endpoints {
    /// Derives the access and config endpoints for a landscape host.
    ///
    /// The host must be a bare DNS name: anything carrying a scheme, path,
    /// port, or userinfo is rejected as `InvalidHost`.
    pub fn for_landscape(host: &str) -> ConfigResult<Self> {
        Ok(Self {
            access: service_base(endpoints::ACCESS_SUBDOMAIN, host)?,
            config: service_base(endpoints::CONFIG_SUBDOMAIN, host)?,
        })
    }

    /// Substitutes a fixed access base instead of deriving one, for
    /// non-standard landscapes and tests against a local server. The config
    /// endpoint is pinned to the same base.
    pub fn with_access_base(base: Url) -> Self {
        Self {
            config: base.clone(),
            access: base,
        }
    }

    /// Base URL of the log access service
    pub fn access(&self) -> &Url {
        &self.access
    }

    /// Base URL of the log configuration service
    pub fn config(&self) -> &Url {
        &self.config
    }

    /// Listing URL for an application: `<access>/<account>/<application>/web`
    pub fn list_url(&self, account: &str, application: &str) -> Url {
        self.under_access(&[account, application, endpoints::LOG_KIND])
    }

    /// Download URL for one log file:
    /// `<access>/<account>/<application>/web/<name>`
    pub fn file_url(&self, account: &str, application: &str, name: &str) -> Url {
        self.under_access(&[account, application, endpoints::LOG_KIND, name])
    }

    fn under_access(&self, segments: &[&str]) -> Url {
        let mut url = self.access.clone();
        url.path_segments_mut()
            .expect("endpoint bases always have a path")
            .pop_if_empty()
            .extend(segments);
        url
    }
}

fn service_base(subdomain: &str, host: &str) -> ConfigResult<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ConfigError::InvalidHost {
            host: host.to_string(),
            reason: "host is empty".to_string(),
        });
    }

    let authority = format!("{subdomain}.{host}");
    let url = Url::parse(&format!("https://{authority}{}", endpoints::API_PATH)).map_err(|e| {
        ConfigError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        }
    })?;

    // A host that smuggles in a path, port, or userinfo parses but does not
    // round-trip as the URL authority.
    let round_trips = url
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case(&authority));
    if !round_trips || url.port().is_some() || !url.username().is_empty() {
        return Err(ConfigError::InvalidHost {
            host: host.to_string(),
            reason: "host must be a bare DNS name".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_endpoint_for_plain_host() {
        let endpoints = Endpoints::for_landscape("example.com").unwrap();
        assert_eq!(
            endpoints.access().as_str(),
            "https://logapi.example.com/log/api_basic/v1/logs/"
        );
        assert_eq!(
            endpoints.config().as_str(),
            "https://logconfig.example.com/log/api_basic/v1/logs/"
        );
    }

    #[test]
    fn test_list_url_layout() {
        let endpoints = Endpoints::for_landscape("eu1.hana.ondemand.com").unwrap();
        let url = endpoints.list_url("acme", "myapp");
        assert_eq!(
            url.as_str(),
            "https://logapi.eu1.hana.ondemand.com/log/api_basic/v1/logs/acme/myapp/web"
        );
    }

    #[test]
    fn test_file_url_layout() {
        let endpoints = Endpoints::for_landscape("eu1.hana.ondemand.com").unwrap();
        let url = endpoints.file_url("acme", "myapp", "ljs_trace.log");
        assert_eq!(
            url.as_str(),
            "https://logapi.eu1.hana.ondemand.com/log/api_basic/v1/logs/acme/myapp/web/ljs_trace.log"
        );
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let endpoints = Endpoints::for_landscape("example.com").unwrap();
        let url = endpoints.file_url("acme", "my app", "trace 1.log");
        assert_eq!(
            url.as_str(),
            "https://logapi.example.com/log/api_basic/v1/logs/acme/my%20app/web/trace%201.log"
        );
    }

    #[test]
    fn test_empty_host_is_rejected() {
        assert!(matches!(
            Endpoints::for_landscape(""),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(Endpoints::for_landscape("   ").is_err());
    }

    #[test]
    fn test_host_with_path_is_rejected() {
        assert!(Endpoints::for_landscape("example.com/evil").is_err());
    }

    #[test]
    fn test_host_with_port_is_rejected() {
        assert!(Endpoints::for_landscape("example.com:8080").is_err());
    }

    #[test]
    fn test_host_with_userinfo_is_rejected() {
        assert!(Endpoints::for_landscape("user@example.com").is_err());
    }

    #[test]
    fn test_host_with_illegal_characters_is_rejected() {
        assert!(Endpoints::for_landscape("exa mple.com").is_err());
    }

    #[test]
    fn test_substituted_base_is_used_verbatim() {
        let base = Url::parse("http://127.0.0.1:8080/log/api_basic/v1/logs/").unwrap();
        let endpoints = Endpoints::with_access_base(base);
        let url = endpoints.list_url("acme", "myapp");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/log/api_basic/v1/logs/acme/myapp/web"
        );
    }
}
