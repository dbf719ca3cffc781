//! HTTP GET collaborator returning JSON bodies.

use crate::weather_data::error::TransportError;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Default per-request timeout of [`HttpTransport::default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues a GET request and returns the decoded JSON body.
///
/// Non-2xx responses must surface as [`TransportError::HttpStatus`].
pub trait Transport {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// `reqwest`-backed [`Transport`] with a bounded request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport whose requests fail after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT).unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            Self::with_client(Client::new())
        })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(TransportError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(url.to_string(), e))
    }
}
