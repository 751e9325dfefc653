//! Blog post entity resolved from a single content item.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A resolved blog post.
///
/// Only `id` and `url_slug` take part in routing; everything else the content
/// item carries (title, body, images) is kept untouched in `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostItem {
    pub id: String,
    pub url_slug: String,
    pub content: Map<String, Value>,
}

impl BlogPostItem {
    /// Creates a post with no display content.
    pub fn new(id: impl Into<String>, url_slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url_slug: url_slug.into(),
            content: Map::new(),
        }
    }

    /// Public path of the post, `/blog/{url_slug}`.
    pub fn route_path(&self) -> String {
        format!("/blog/{}", self.url_slug)
    }
}

/// Wire shape of a blog post payload before identity is settled.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlogPostPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_meta")]
    pub meta: Option<ContentMeta>,
    #[serde(default)]
    pub url_slug: Option<String>,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

/// Delivery metadata attached to every content item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentMeta {
    #[serde(default)]
    pub delivery_id: Option<String>,
}

impl BlogPostPayload {
    /// Post identity: explicit `id`, then `_meta.deliveryId`, then the id it
    /// was requested by.
    pub fn resolve_id(&self, requested_id: &str) -> String {
        self.id
            .clone()
            .or_else(|| self.meta.as_ref().and_then(|m| m.delivery_id.clone()))
            .unwrap_or_else(|| requested_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_path() {
        let post = BlogPostItem::new("8d6943c7-6028-4fac-b45e-57fc63bd032a", "my-first-blog");
        assert_eq!(post.route_path(), "/blog/my-first-blog");
    }

    #[test]
    fn test_payload_prefers_explicit_id() {
        let payload: BlogPostPayload = serde_json::from_value(json!({
            "_meta": { "deliveryId": "from-meta" },
            "id": "explicit",
            "urlSlug": "slug"
        }))
        .unwrap();

        assert_eq!(payload.resolve_id("requested"), "explicit");
    }

    #[test]
    fn test_payload_falls_back_to_delivery_id() {
        let payload: BlogPostPayload = serde_json::from_value(json!({
            "_meta": { "deliveryId": "from-meta", "name": "post" },
            "urlSlug": "slug"
        }))
        .unwrap();

        assert_eq!(payload.resolve_id("requested"), "from-meta");
    }

    #[test]
    fn test_payload_falls_back_to_requested_id() {
        let payload: BlogPostPayload =
            serde_json::from_value(json!({ "urlSlug": "slug", "title": "Hello" })).unwrap();

        assert_eq!(payload.resolve_id("requested"), "requested");
        assert_eq!(payload.content.get("title"), Some(&json!("Hello")));
    }
}
