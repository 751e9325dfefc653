//! Content delivery capability: single-item reads by opaque identifier.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A content item as delivered, projected to plain JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RawContentItem(Value);

impl RawContentItem {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Borrowed JSON projection of the item.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Owned JSON projection of the item.
    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for RawContentItem {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

/// Failures reported by a delivery backend.
///
/// Only [`DeliveryError::NotFound`] is ever recoverable, and only for post
/// lookups; callers decide that, not the backend.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Content item not found: {id}")]
    NotFound { id: String },

    #[error("Content delivery request failed: {0}")]
    Transport(String),

    #[error("Content delivery returned an unreadable payload: {0}")]
    Decode(String),
}

impl DeliveryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read access to a content-delivery service.
///
/// # Implementations
///
/// - [`crate::infrastructure::delivery::HttpContentDelivery`] - REST delivery API
/// - [`crate::infrastructure::delivery::FixtureContentDelivery`] - JSON files on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentDelivery: Send + Sync {
    /// Fetches one content item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::NotFound`] if the service cannot resolve `id`,
    /// and [`DeliveryError::Transport`] or [`DeliveryError::Decode`] for
    /// every other failure.
    async fn fetch_content_item(&self, id: &str) -> Result<RawContentItem, DeliveryError>;
}
