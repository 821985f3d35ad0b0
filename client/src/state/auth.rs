//! Credential stores consulted by the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard never reaches into ambient storage. Whoever renders the app puts
//! a `CredentialProvider` into Leptos context: the browser reads
//! `document.cookie`, the server wraps the request cookie jar, tests supply a
//! fixed value.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::Arc;

/// Name of the cookie holding the credential token.
pub const TOKEN_COOKIE: &str = "jwt_token";

/// Read-only source of the credential token.
///
/// Only presence is examined. Implementations must not mutate anything and
/// report `None` when the backing storage is unavailable.
pub trait CredentialStore: Send + Sync {
    /// Current token value, or `None` when absent.
    fn token(&self) -> Option<String>;

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Store with a fixed token, used for tests and previews.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    #[must_use]
    pub fn absent() -> Self {
        Self { token: None }
    }

    #[must_use]
    pub fn present(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }
}

impl CredentialStore for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Reads `document.cookie` on every call. Always absent outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = document_cookie()?;
            crate::util::cookie::cookie_value(&raw, TOKEN_COOKIE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html.cookie().ok()
}

/// Shared handle placed in Leptos context for the guard to read.
#[derive(Clone)]
pub struct CredentialProvider(Arc<dyn CredentialStore>);

impl CredentialProvider {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// Provider backed by the browser cookie jar.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserCredentials)
    }
}

impl CredentialStore for CredentialProvider {
    fn token(&self) -> Option<String> {
        self.0.token()
    }
}

impl fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialProvider")
            .field("has_token", &self.has_token())
            .finish()
    }
}
