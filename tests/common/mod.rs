#![allow(dead_code)]

use async_trait::async_trait;
use blog_path_map::prelude::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const BLOG_LIST_ID: &str = "blog-list-slot";
pub const FIRST_POST_ID: &str = "8d6943c7-6028-4fac-b45e-57fc63bd032a";

/// Directory of one fixture scenario under `tests/fixtures`.
pub fn fixture_dir(scenario: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(scenario)
}

pub fn build_config() -> BuildConfig {
    BuildConfig::new(BLOG_LIST_ID)
}

/// The routes every build emits, as JSON.
pub fn fixed_routes_json() -> Value {
    json!({
        "/": { "page": "/", "query": { "vse": "" } },
        "/preview": { "page": "/preview", "query": { "content": "", "vse": "" } },
        "/visualization.html": {
            "page": "/visualization",
            "query": { "vse": "", "content": "" }
        }
    })
}

enum Reply {
    Item(Value),
    NotFound,
    Fail(String),
}

/// In-memory delivery with optional per-item latency.
///
/// Unknown ids are reported as not found.
#[derive(Default)]
pub struct StubDelivery {
    replies: HashMap<String, (Reply, Duration)>,
    calls: AtomicUsize,
}

impl StubDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, id: &str, body: Value) -> Self {
        self.replies
            .insert(id.to_string(), (Reply::Item(body), Duration::ZERO));
        self
    }

    pub fn delayed_item(mut self, id: &str, body: Value, delay: Duration) -> Self {
        self.replies.insert(id.to_string(), (Reply::Item(body), delay));
        self
    }

    pub fn not_found(mut self, id: &str) -> Self {
        self.replies
            .insert(id.to_string(), (Reply::NotFound, Duration::ZERO));
        self
    }

    pub fn failing(mut self, id: &str, message: &str) -> Self {
        self.replies.insert(
            id.to_string(),
            (Reply::Fail(message.to_string()), Duration::ZERO),
        );
        self
    }

    /// Blog list referencing `post_ids` in order.
    pub fn blog_list(self, post_ids: &[&str]) -> Self {
        let posts: Vec<Value> = post_ids.iter().map(|id| json!({ "id": id })).collect();
        self.item(
            BLOG_LIST_ID,
            json!({
                "blogList": { "title": "Blog", "subTitle": "Posts", "blogPosts": posts }
            }),
        )
    }

    pub fn post(self, id: &str, slug: &str) -> Self {
        self.item(id, post_body(id, slug))
    }

    pub fn delayed_post(self, id: &str, slug: &str, delay: Duration) -> Self {
        self.delayed_item(id, post_body(id, slug), delay)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn post_body(id: &str, slug: &str) -> Value {
    json!({ "id": id, "title": format!("Post {id}"), "urlSlug": slug })
}

#[async_trait]
impl ContentDelivery for StubDelivery {
    async fn fetch_content_item(&self, id: &str) -> Result<RawContentItem, DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.replies.get(id) {
            Some((reply, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                match reply {
                    Reply::Item(body) => Ok(RawContentItem::new(body.clone())),
                    Reply::NotFound => Err(DeliveryError::not_found(id)),
                    Reply::Fail(message) => Err(DeliveryError::Transport(message.clone())),
                }
            }
            None => Err(DeliveryError::not_found(id)),
        }
    }
}
