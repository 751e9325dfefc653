//! Route map entities consumed by the static-export driver.
//!
//! Both [`Query`] and [`RouteMap`] keep insertion order so that identical
//! content always serializes to identical bytes.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Page component a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    #[serde(rename = "/")]
    Landing,
    #[serde(rename = "/blog")]
    Blog,
    #[serde(rename = "/preview")]
    Preview,
    #[serde(rename = "/visualization")]
    Visualization,
}

impl Page {
    /// Page identifier as the export driver expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Blog => "/blog",
            Self::Preview => "/preview",
            Self::Visualization => "/visualization",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters forwarded to the page component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(IndexMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing the value of an existing key in place.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single route: which page to render and with which parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub page: Page,
    pub query: Query,
}

impl RouteEntry {
    pub fn new(page: Page, query: Query) -> Self {
        Self { page, query }
    }

    /// Route for one blog post.
    pub fn blog(blog_id: &str, slug: &str) -> Self {
        Self::new(
            Page::Blog,
            Query::new().with("blogId", blog_id).with("slug", slug),
        )
    }
}

/// Mapping from public path to [`RouteEntry`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteMap {
    entries: IndexMap<String, RouteEntry>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a route, returning the entry it displaced if the path was
    /// already mapped. A displaced entry keeps its position.
    pub fn insert(&mut self, path: impl Into<String>, entry: RouteEntry) -> Option<RouteEntry> {
        self.entries.insert(path.into(), entry)
    }

    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }

    /// Routes under `/blog/`.
    pub fn blog_routes(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.iter().filter(|(p, _)| p.starts_with("/blog/"))
    }
}
