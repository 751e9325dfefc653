mod common;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use blog_path_map::infrastructure::delivery::HttpContentDelivery;
use blog_path_map::prelude::*;
use common::{BLOG_LIST_ID, FIRST_POST_ID, build_config, post_body};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct DeliveryState {
    items: Arc<HashMap<String, Value>>,
    broken: Arc<Vec<String>>,
}

async fn content_item(
    State(state): State<DeliveryState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    if state.broken.contains(&id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        );
    }
    match state.items.get(&id) {
        Some(content) => (StatusCode::OK, Json(json!({ "content": content }))),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
    }
}

/// Serves `GET /content/id/{id}` from `items`; unknown ids answer 404 and
/// ids listed in `broken` answer 500.
async fn spawn_delivery_server(items: HashMap<String, Value>, broken: Vec<String>) -> String {
    let state = DeliveryState {
        items: Arc::new(items),
        broken: Arc::new(broken),
    };
    let app = Router::new()
        .route("/content/id/{id}", get(content_item))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    format!("http://{}", addr)
}

fn blog_list(ids: &[&str]) -> Value {
    let posts: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "blogList": { "title": "Blog", "subTitle": "Posts", "blogPosts": posts } })
}

fn delivery(base_url: &str) -> Arc<HttpContentDelivery> {
    Arc::new(HttpContentDelivery::new(base_url, Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_http_fetch_unwraps_content() {
    let items = HashMap::from([(
        FIRST_POST_ID.to_string(),
        post_body(FIRST_POST_ID, "my-first-blog"),
    )]);
    let base = spawn_delivery_server(items, vec![]).await;

    let item = delivery(&base)
        .fetch_content_item(FIRST_POST_ID)
        .await
        .unwrap();

    assert_eq!(item.as_json()["urlSlug"], "my-first-blog");
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let base = spawn_delivery_server(HashMap::new(), vec![]).await;

    let err = delivery(&base).fetch_content_item("missing").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_http_500_is_transport_error() {
    let base = spawn_delivery_server(HashMap::new(), vec!["broken".to_string()]).await;

    let err = delivery(&base).fetch_content_item("broken").await.unwrap_err();

    assert!(matches!(err, DeliveryError::Transport(_)));
}

#[tokio::test]
async fn test_http_build_end_to_end() {
    let items = HashMap::from([
        (BLOG_LIST_ID.to_string(), blog_list(&[FIRST_POST_ID, "gone"])),
        (
            FIRST_POST_ID.to_string(),
            post_body(FIRST_POST_ID, "my-first-blog"),
        ),
    ]);
    let base = spawn_delivery_server(items, vec![]).await;

    let report = RouteMapService::new(delivery(&base), build_config())
        .build()
        .await
        .unwrap();

    assert_eq!(report.skipped, vec![BlogReference::new("gone")]);
    assert_eq!(
        report.route_map.get("/blog/my-first-blog"),
        Some(&RouteEntry::blog(FIRST_POST_ID, "my-first-blog"))
    );
}

#[tokio::test]
async fn test_http_server_error_aborts_build() {
    let items = HashMap::from([(BLOG_LIST_ID.to_string(), blog_list(&["broken"]))]);
    let base = spawn_delivery_server(items, vec!["broken".to_string()]).await;

    let err = RouteMapService::new(delivery(&base), build_config())
        .build()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream { .. }));
}
