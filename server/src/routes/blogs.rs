//! Blog routes: proxy one upstream blog as a reshaped record.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::state::blog::BlogDetail;

use crate::services::blog::BlogError;
use crate::state::AppState;

pub(crate) fn blog_error_to_status(err: &BlogError) -> StatusCode {
    match err {
        BlogError::Status { status: 404 } => StatusCode::NOT_FOUND,
        BlogError::Status { .. } | BlogError::Request(_) | BlogError::Parse(_) => StatusCode::BAD_GATEWAY,
        BlogError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/blogs/{id}`: fetch, reshape and return one blog.
pub async fn get_blog(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<BlogDetail>, StatusCode> {
    match state.blogs.fetch(&id).await {
        Ok(detail) => Ok(Json(detail)),
        Err(e) => {
            tracing::warn!(error = %e, blog_id = %id, "blog fetch failed");
            Err(blog_error_to_status(&e))
        }
    }
}
