//! Fatal build errors.
//!
//! Every variant aborts the build: no route map is produced. The one
//! recoverable case, a post reference that cannot be resolved, never becomes
//! an [`AppError`]; see [`crate::application::services::NotFound`].

use thiserror::Error;

/// Message used when the blog-list slot carries no `blogList` field.
pub const MISSING_BLOG_LIST: &str = "Error building exportPathMap: slot does not contain a blog list";

/// Prefix of the duplicate-slug validation message.
pub const DUPLICATE_SLUGS: &str = "Blog posts contain duplicate urlSlugs: ";

#[derive(Debug, Error)]
pub enum AppError {
    /// The content item configured as the blog list is not shaped like one.
    #[error("{message}")]
    Configuration { message: String },

    /// Resolved content violates a routing invariant.
    #[error("{message}")]
    Validation { message: String },

    /// The content service failed, or returned something undecodable.
    #[error("{message}: {source}")]
    Upstream {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Upstream {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Blog-list payload without a `blogList` field.
    pub fn missing_blog_list() -> Self {
        Self::configuration(MISSING_BLOG_LIST)
    }

    /// Duplicate slugs, listed once each in first-seen order.
    pub fn duplicate_slugs(slugs: &[String]) -> Self {
        Self::validation(format!("{}{}", DUPLICATE_SLUGS, slugs.join(" ")))
    }
}
