//! Blog detail record and its load state machine.
//!
//! DESIGN
//! ======
//! A detail view moves `Idle -> Loading` on mount and resolves exactly once,
//! to `Loaded` or `Failed`. Resolutions arriving in any other state are
//! dropped, so a late or duplicate result cannot overwrite the view.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use serde::{Deserialize, Serialize};

/// Reshaped blog record used for rendering.
///
/// Serialized with `imageUrl` / `avatarUrl` keys for the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetail {
    pub title: String,
    pub image_url: String,
    pub avatar_url: String,
    pub author: String,
    pub content: String,
    pub topic: String,
}

/// Upstream wire shape of `GET /blogs/{id}`. Missing fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlogPayload {
    pub title: String,
    pub image_url: String,
    pub avatar_url: String,
    pub author: String,
    pub content: String,
    pub topic: String,
}

impl From<BlogPayload> for BlogDetail {
    fn from(payload: BlogPayload) -> Self {
        Self {
            title: payload.title,
            image_url: payload.image_url,
            avatar_url: payload.avatar_url,
            author: payload.author,
            content: payload.content,
            topic: payload.topic,
        }
    }
}

/// Parse an upstream response body into the reshaped record.
///
/// # Errors
///
/// Returns the `serde_json` error when the body is not a JSON object with
/// string fields. Arrays are rejected even though serde would read them as a
/// positional record.
pub fn parse_blog_payload(body: &str) -> Result<BlogDetail, serde_json::Error> {
    let object = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(body)?;
    serde_json::from_value::<BlogPayload>(serde_json::Value::Object(object)).map(BlogDetail::from)
}

/// Load state of a single detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Loaded(BlogDetail),
    Failed(String),
}

impl DetailState {
    /// Enter `Loading`. Only valid from `Idle`; returns whether it moved.
    pub fn begin(&mut self) -> bool {
        if *self != Self::Idle {
            return false;
        }
        *self = Self::Loading;
        true
    }

    /// Apply the fetch outcome. Only valid from `Loading`; returns whether it moved.
    pub fn resolve(&mut self, outcome: Result<BlogDetail, String>) -> bool {
        if *self != Self::Loading {
            return false;
        }
        *self = match outcome {
            Ok(detail) => Self::Loaded(detail),
            Err(reason) => Self::Failed(reason),
        };
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn detail(&self) -> Option<&BlogDetail> {
        match self {
            Self::Loaded(detail) => Some(detail),
            _ => None,
        }
    }
}
