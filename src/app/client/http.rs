//! Authenticated HTTP transport
//!
//! One bounded GET per operation: the basic-auth header goes on every
//! request, any non-200 status is an error, and nothing retries. The
//! connection pool inside `reqwest::Client` is the only state shared across
//! sequential calls.

use reqwest::{Client, StatusCode};
use url::Url;

use crate::auth::Credentials;
use crate::errors::{TransportError, TransportResult};

/// Thin wrapper around a configured `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a handler around an already-built client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs one authenticated GET and returns the full response body.
    ///
    /// A non-200 status becomes `TransportError::Status` carrying the
    /// reason phrase; the unread body is dropped, which releases the
    /// connection back to the pool.
    pub async fn get(&self, url: &Url, credentials: &Credentials) -> TransportResult<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .basic_auth(credentials.user(), Some(credentials.password()))
            .send()
            .await
            .map_err(|source| TransportError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Network {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("GET {} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
