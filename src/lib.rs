//! # Blog Path Map
//!
//! Builds the route map a static-export pipeline needs to pre-render a
//! content-managed blog.
//!
//! At build time the blog list content item is fetched from the content
//! delivery service, every post it references is resolved concurrently, and
//! the result is assembled into a mapping from public path to page plus query
//! parameters.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Blog and route entities, delivery trait
//! - **Application Layer** ([`application`]) - Content resolution and route map build
//! - **Infrastructure Layer** ([`infrastructure`]) - Delivery backends and output
//!
//! ## Failure model
//!
//! A post the content service does not know is skipped with a warning. Every
//! other failure (missing blog list, duplicate slugs, service errors) aborts
//! the build with an [`AppError`] and produces no route map.
//!
//! ## Configuration
//!
//! Run configuration is loaded from environment variables via [`config::Config`];
//! the build itself only sees the explicit [`config::BuildConfig`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BuildReport, ContentResolver, NotFound, RouteMapService};
    pub use crate::config::BuildConfig;
    pub use crate::domain::entities::{
        BlogListItem, BlogPostItem, BlogReference, Page, Query, RouteEntry, RouteMap,
    };
    pub use crate::domain::repositories::{ContentDelivery, DeliveryError, RawContentItem};
    pub use crate::error::AppError;
}
