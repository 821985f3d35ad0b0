//! Blog service: fetches one blog from the upstream API and reshapes it.
//!
//! Thin HTTP wrapper for `GET {base}/blogs/{id}`. Body parsing and the field
//! remap live in `client::state::blog` so the browser and server share one
//! record type.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use std::time::Duration;

use client::state::blog::{BlogDetail, parse_blog_payload};

use crate::config::BlogApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("blog request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("blog API returned status {status}")]
    Status { status: u16 },

    /// The upstream body is not a blog record.
    #[error("blog response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Source of blog detail records.
#[async_trait::async_trait]
pub trait BlogSource: Send + Sync {
    /// Fetch and reshape the blog identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`BlogError`] if the request fails, the upstream status is
    /// not a success, or the body cannot be parsed.
    async fn fetch(&self, id: &str) -> Result<BlogDetail, BlogError>;
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

pub struct HttpBlogSource {
    http: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpBlogSource {
    /// Build a pooled client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::HttpClientBuild`] if the base URL is not an
    /// absolute http(s) URL or the client cannot be constructed.
    pub fn new(config: &BlogApiConfig) -> Result<Self, BlogError> {
        let base_url =
            reqwest::Url::parse(&config.base_url).map_err(|e| BlogError::HttpClientBuild(format!("base url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BlogError::HttpClientBuild(format!("base url cannot be a base: {base_url}")));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| BlogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// `{base}/blogs/{id}` with `id` percent-encoded as one path segment.
    pub(crate) fn blog_url(&self, id: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("blogs").push(id);
        }
        url
    }
}

#[async_trait::async_trait]
impl BlogSource for HttpBlogSource {
    async fn fetch(&self, id: &str) -> Result<BlogDetail, BlogError> {
        let response = self
            .http
            .get(self.blog_url(id))
            .send()
            .await
            .map_err(|e| BlogError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BlogError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(BlogError::Status { status: status.as_u16() });
        }

        parse_blog_payload(&text).map_err(|e| BlogError::Parse(e.to_string()))
    }
}
