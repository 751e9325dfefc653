//! Route map construction for the static export.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::services::content_resolver::{ContentResolver, NotFound};
use crate::config::BuildConfig;
use crate::domain::entities::{BlogPostItem, BlogReference, Page, Query, RouteEntry, RouteMap};
use crate::domain::repositories::ContentDelivery;
use crate::error::AppError;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub route_map: RouteMap,
    /// References skipped because the content service could not resolve them,
    /// in blog-list order.
    pub skipped: Vec<BlogReference>,
}

/// Builds the route map from the blog list and its posts.
///
/// One builder serves one build: it owns the delivery client and the
/// [`BuildConfig`] it was created with.
pub struct RouteMapService<C: ContentDelivery + ?Sized> {
    resolver: ContentResolver<C>,
    config: BuildConfig,
}

impl<C: ContentDelivery + ?Sized> RouteMapService<C> {
    /// Creates a new route map service.
    pub fn new(client: Arc<C>, config: BuildConfig) -> Self {
        Self {
            resolver: ContentResolver::new(client),
            config,
        }
    }

    /// Builds the route map.
    ///
    /// # Flow
    ///
    /// 1. Fetch the blog list (must carry a `blogList` field)
    /// 2. Resolve every referenced post concurrently
    /// 3. Skip posts the content service does not know, with a warning
    /// 4. Reject duplicate slugs among the resolved posts
    /// 5. Emit `/blog/{slug}` routes in list order, then the fixed routes
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the blog list item has no
    /// `blogList` field, [`AppError::Validation`] on duplicate slugs, and
    /// [`AppError::Upstream`] on any content-service failure other than a
    /// missing post. No route map is produced in any of these cases.
    pub async fn build(&self) -> Result<BuildReport, AppError> {
        let list_id = &self.config.blog_list_id;
        info!("Building route map from blog list {}", list_id);

        let blog_list = self.resolver.fetch_blog_list(list_id).await?;
        let references = blog_list.references();

        let (posts, skipped) = self.resolve_posts(references).await?;
        check_unique_slugs(&posts)?;

        let mut route_map = RouteMap::new();
        for post in &posts {
            route_map.insert(post.route_path(), RouteEntry::blog(&post.id, &post.url_slug));
        }
        for (path, entry) in fixed_routes() {
            route_map.insert(path, entry);
        }

        info!(
            "Route map built: {} blog routes, {} skipped, {} total",
            posts.len(),
            skipped.len(),
            route_map.len()
        );

        Ok(BuildReport { route_map, skipped })
    }

    /// Resolves all references concurrently and folds the outcomes back into
    /// list order.
    ///
    /// When several lookups fail fatally, the earliest reference's error wins.
    async fn resolve_posts(
        &self,
        references: &[BlogReference],
    ) -> Result<(Vec<BlogPostItem>, Vec<BlogReference>), AppError> {
        if references.is_empty() {
            debug!("Blog list has no posts");
            return Ok((Vec::new(), Vec::new()));
        }

        let resolver = &self.resolver;
        let mut outcomes: Vec<(usize, Result<Result<BlogPostItem, NotFound>, AppError>)> =
            stream::iter(references.iter().enumerate())
                .map(|(index, reference)| async move {
                    (index, resolver.fetch_blog_post(&reference.id).await)
                })
                .buffer_unordered(self.config.max_concurrent_fetches.max(1))
                .collect()
                .await;
        outcomes.sort_by_key(|(index, _)| *index);

        let mut posts = Vec::with_capacity(references.len());
        let mut skipped = Vec::new();

        for (index, outcome) in outcomes {
            match outcome? {
                Ok(post) => posts.push(post),
                Err(NotFound { id }) => {
                    warn!("Blog post {} referenced by the blog list was not found, skipping", id);
                    skipped.push(references[index].clone());
                }
            }
        }

        Ok((posts, skipped))
    }
}

/// Rejects resolved posts that share a slug.
///
/// Each offending slug is reported once, in the order it first appeared.
fn check_unique_slugs(posts: &[BlogPostItem]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();

    for post in posts {
        if !seen.insert(post.url_slug.as_str()) && !duplicates.contains(&post.url_slug) {
            duplicates.push(post.url_slug.clone());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(AppError::duplicate_slugs(&duplicates))
    }
}

/// Routes present in every export regardless of blog content.
pub fn fixed_routes() -> [(&'static str, RouteEntry); 3] {
    [
        ("/", RouteEntry::new(Page::Landing, Query::new().with("vse", ""))),
        (
            "/preview",
            RouteEntry::new(Page::Preview, Query::new().with("content", "").with("vse", "")),
        ),
        (
            "/visualization.html",
            RouteEntry::new(
                Page::Visualization,
                Query::new().with("vse", "").with("content", ""),
            ),
        ),
    ]
}
