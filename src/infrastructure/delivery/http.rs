//! Content delivery over the REST delivery API.

use crate::domain::repositories::{ContentDelivery, DeliveryError, RawContentItem};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Delivery API client fetching one item per request.
///
/// Items are requested with every linked item inlined, so the returned JSON is
/// the full `toJSON()` projection of the content item.
pub struct HttpContentDelivery {
    client: Client,
    base_url: Url,
}

impl HttpContentDelivery {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] if the URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DeliveryError::Transport(format!("Invalid base URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DeliveryError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!("Content delivery at {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Constructs `{base}/content/id/{id}?depth=all&format=inlined`.
    pub fn item_url(&self, id: &str) -> Result<Url, DeliveryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DeliveryError::Transport(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["content", "id", id]);
        url.query_pairs_mut()
            .append_pair("depth", "all")
            .append_pair("format", "inlined");
        Ok(url)
    }
}

#[async_trait]
impl ContentDelivery for HttpContentDelivery {
    async fn fetch_content_item(&self, id: &str) -> Result<RawContentItem, DeliveryError> {
        let url = self.item_url(id)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DeliveryError::not_found(id));
        }
        if !status.is_success() {
            return Err(DeliveryError::Transport(format!(
                "Unexpected status {} for content item {}",
                status, id
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DeliveryError::Decode(format!("Content item {}: {}", id, e)))?;

        match body {
            Value::Object(mut envelope) => match envelope.remove("content") {
                Some(content) => Ok(RawContentItem::new(content)),
                None => Err(DeliveryError::Decode(format!(
                    "Content item {}: response has no content field",
                    id
                ))),
            },
            _ => Err(DeliveryError::Decode(format!(
                "Content item {}: response is not a JSON object",
                id
            ))),
        }
    }
}
