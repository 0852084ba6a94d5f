//! HTTP implementation of [`BookStore`]

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::{create_http_client, ClientConfig};
use crate::error::{Result, TransportError};
use crate::store::BookStore;
use crate::types::Book;

/// REST client for the collection endpoint.
pub struct RestBookStore {
    client: Client,
    base_url: String,
}

impl RestBookStore {
    /// Client bound to the endpoint in `config`.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: create_http_client(config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of a single entity under the collection.
    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Map a reqwest send failure onto the transport error taxonomy.
fn send_error(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

/// Perform one request and return the response body text.
///
/// Unified processing: send, log, status check, read body. A non-success
/// status consumes the body for the log and maps to [`TransportError::Status`].
async fn execute(request: RequestBuilder, method: &str, url: &str) -> Result<String> {
    log::debug!("{method} {url}");

    let response = request.send().await.map_err(|e| send_error(&e))?;

    let status = response.status();
    log::debug!("Response Status: {status}");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("{method} {url} failed with HTTP {status}: {body}");
        return Err(TransportError::Status {
            status: status.as_u16(),
        });
    }

    let response_text = response
        .text()
        .await
        .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?;

    log::debug!("Response Body: {response_text}");

    Ok(response_text)
}

/// Parse a JSON response body.
fn parse_json<T: DeserializeOwned>(response_text: &str) -> Result<T> {
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {response_text}");
        TransportError::Parse(e.to_string())
    })
}

#[async_trait]
impl BookStore for RestBookStore {
    async fn list_all(&self) -> Result<Vec<Book>> {
        let text = execute(self.client.get(&self.base_url), "GET", &self.base_url).await?;
        parse_json(&text)
    }

    async fn create(&self, book: &Book) -> Result<Book> {
        let text = execute(
            self.client.post(&self.base_url).json(book),
            "POST",
            &self.base_url,
        )
        .await?;
        parse_json(&text)
    }

    async fn replace(&self, id: &str, book: &Book) -> Result<Book> {
        let url = self.item_url(id);
        let text = execute(self.client.put(&url).json(book), "PUT", &url).await?;
        parse_json(&text)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = self.item_url(id);
        // Delete responses carry no payload worth parsing.
        execute(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
