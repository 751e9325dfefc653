//! Content delivery from JSON files on disk.

use crate::domain::repositories::{ContentDelivery, DeliveryError, RawContentItem};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Serves content items from `{dir}/{id}.json`.
///
/// Each file holds the JSON projection of one content item. A missing file
/// reads as "not found", the same as an unknown id on the delivery API.
///
/// # Use Cases
///
/// - Offline builds from an exported content snapshot
/// - Integration tests
pub struct FixtureContentDelivery {
    dir: PathBuf,
}

impl FixtureContentDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!("Using fixture content from {}", dir.display());
        Self { dir }
    }

    /// Ids are opaque, but must stay a single file name inside `dir`.
    fn item_path(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\', '\0']);
        valid.then(|| self.dir.join(format!("{}.json", id)))
    }
}

#[async_trait]
impl ContentDelivery for FixtureContentDelivery {
    async fn fetch_content_item(&self, id: &str) -> Result<RawContentItem, DeliveryError> {
        let path = self
            .item_path(id)
            .ok_or_else(|| DeliveryError::not_found(id))?;

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(DeliveryError::not_found(id)),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(DeliveryError::Decode(format!("{}: {}", path.display(), e)));
            }
            Err(e) => {
                return Err(DeliveryError::Transport(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&text)
            .map(RawContentItem::new)
            .map_err(|e| DeliveryError::Decode(format!("{}: {}", path.display(), e)))
    }
}
