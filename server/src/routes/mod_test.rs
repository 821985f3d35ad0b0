use super::*;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::LOCATION;
use client::state::blog::BlogDetail;
use tower::ServiceExt;

use crate::services::blog::{BlogError, BlogSource};

struct EmptyBlogs;

#[async_trait]
impl BlogSource for EmptyBlogs {
    async fn fetch(&self, _id: &str) -> Result<BlogDetail, BlogError> {
        Err(BlogError::Status { status: 404 })
    }
}

async fn get_status(uri: &str) -> Response {
    app(AppState::new(Arc::new(EmptyBlogs)))
        .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(get_status("/healthz").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_path_redirects_to_not_found() {
    for uri in ["/nope", "/products/42", "/blogs"] {
        let response = get_status(uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "uri {uri}");
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/not-found", "uri {uri}");
    }
}

#[tokio::test]
async fn not_found_target_does_not_loop() {
    let response = get_status("/not-found").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(LOCATION).is_none());
}

#[tokio::test]
async fn blog_api_is_routed() {
    assert_eq!(get_status("/api/blogs/1").await.status(), StatusCode::NOT_FOUND);
    assert!(get_status("/api/blogs/1").await.headers().get(LOCATION).is_none());
}
