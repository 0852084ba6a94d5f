//! Client configuration

use std::time::Duration;

use reqwest::Client;

/// Development address of the collection resource.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/livrosvirtual";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`RestBookStore`](crate::RestBookStore).
///
/// The base address is configuration, not protocol logic: the client never
/// inspects or rewrites it beyond appending the `/{id}` path segment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the collection endpoint.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Create an HTTP client with the configured timeouts.
pub(crate) fn create_http_client(config: &ClientConfig) -> Client {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .expect("Failed to create HTTP client")
}
