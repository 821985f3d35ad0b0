//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the fetch belongs to the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` and end up in `DetailState::Failed`,
//! so the view shows a message instead of waiting forever.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::blog::BlogDetail;

#[cfg(any(test, feature = "hydrate"))]
fn blog_endpoint(id: &str) -> String {
    format!("/api/blogs/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn blog_request_failed_message(status: u16) -> String {
    format!("blog request failed: {status}")
}

/// Fetch one reshaped blog record via `GET /api/blogs/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a blog record.
pub async fn fetch_blog(id: &str) -> Result<BlogDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = blog_endpoint(id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = blog_request_failed_message(resp.status());
            log::warn!("{message}");
            return Err(message);
        }
        resp.json::<BlogDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
