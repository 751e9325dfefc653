//! Content resolution: typed reads on top of the delivery capability.

use std::sync::Arc;

use crate::domain::entities::blog_post::BlogPostPayload;
use crate::domain::entities::{BlogListItem, BlogPostItem};
use crate::domain::repositories::{ContentDelivery, DeliveryError};
use crate::error::AppError;
use serde_json::Value;
use tracing::debug;

/// Field of the blog-list slot holding the list itself.
const BLOG_LIST_FIELD: &str = "blogList";

/// A post reference the content service could not resolve.
///
/// Returned as a value, never raised, so a build can skip the post and go on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub id: String,
}

/// Fetches content items and decodes them into blog entities.
///
/// Separates the one recoverable failure (a post that does not exist) from
/// everything that must abort the build.
pub struct ContentResolver<C: ContentDelivery + ?Sized> {
    client: Arc<C>,
}

impl<C: ContentDelivery + ?Sized> ContentResolver<C> {
    /// Creates a new content resolver.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetches and decodes the blog list.
    ///
    /// A `blogList` present without posts is a valid, empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the item has no `blogList`
    /// field (or it is `null`).
    ///
    /// Returns [`AppError::Upstream`] if the fetch fails for any reason,
    /// including the list itself not being found, or if the list cannot be
    /// decoded.
    pub async fn fetch_blog_list(&self, list_id: &str) -> Result<BlogListItem, AppError> {
        debug!("Fetching blog list {}", list_id);

        let item = self
            .client
            .fetch_content_item(list_id)
            .await
            .map_err(|e| AppError::upstream(format!("Failed to fetch blog list {list_id}"), e))?;

        let blog_list = match item.into_json() {
            Value::Object(mut body) => body.remove(BLOG_LIST_FIELD),
            _ => None,
        };

        match blog_list {
            None | Some(Value::Null) => Err(AppError::missing_blog_list()),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                AppError::upstream(format!("Failed to decode blog list {list_id}"), e)
            }),
        }
    }

    /// Fetches and decodes a single blog post.
    ///
    /// # Returns
    ///
    /// - `Ok(Ok(post))` if the post resolved
    /// - `Ok(Err(NotFound))` if the content service does not know `post_id`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] for any other delivery failure, and for
    /// a payload that cannot be decoded or has no `urlSlug`.
    pub async fn fetch_blog_post(
        &self,
        post_id: &str,
    ) -> Result<Result<BlogPostItem, NotFound>, AppError> {
        debug!("Fetching blog post {}", post_id);

        let item = match self.client.fetch_content_item(post_id).await {
            Ok(item) => item,
            Err(DeliveryError::NotFound { .. }) => {
                return Ok(Err(NotFound {
                    id: post_id.to_string(),
                }));
            }
            Err(e) => {
                return Err(AppError::upstream(
                    format!("Failed to fetch blog post {post_id}"),
                    e,
                ));
            }
        };

        let payload: BlogPostPayload = serde_json::from_value(item.into_json()).map_err(|e| {
            AppError::upstream(format!("Failed to decode blog post {post_id}"), e)
        })?;

        let id = payload.resolve_id(post_id);
        let url_slug = match payload.url_slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => {
                return Err(AppError::upstream(
                    format!("Failed to decode blog post {post_id}"),
                    anyhow::anyhow!("urlSlug is missing or empty"),
                ));
            }
        };

        Ok(Ok(BlogPostItem {
            id,
            url_slug,
            content: payload.content,
        }))
    }
}
