//! Core domain entities.
//!
//! Entities are plain data structures built fresh on every build from live
//! content-service responses and never mutated once the route map is returned.
//!
//! # Entity Types
//!
//! - [`BlogListItem`] / [`BlogReference`] - The landing list and its post pointers
//! - [`BlogPostItem`] - A resolved post
//! - [`RouteMap`] / [`RouteEntry`] - The export route table

pub mod blog_list;
pub mod blog_post;
pub mod route;

pub use blog_list::{BlogListItem, BlogReference};
pub use blog_post::BlogPostItem;
pub use route::{Page, Query, RouteEntry, RouteMap};
