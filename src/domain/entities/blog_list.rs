//! Blog list entity: the landing content item that references every post.

use serde::{Deserialize, Serialize};

/// The landing content item listing the blog's posts.
///
/// `blog_posts` is `None` when the list carries no `blogPosts` field at all,
/// which content editors produce for a list that has never had posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_posts: Option<Vec<BlogReference>>,
}

impl BlogListItem {
    /// Post references in list order; empty when the list has none.
    pub fn references(&self) -> &[BlogReference] {
        self.blog_posts.as_deref().unwrap_or_default()
    }
}

/// Pointer to a blog post content item.
///
/// Content links carry more than the id (schema, content type), but only the
/// id matters for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogReference {
    pub id: String,
}

impl BlogReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
