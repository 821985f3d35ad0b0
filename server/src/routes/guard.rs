//! Server-side route guard for page requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Initial page loads are rendered on the server, so the guard runs here
//! before SSR as well as in the `Protected` component after hydration. Both
//! call `client::util::auth::guard` with a store over the request cookies.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::state::auth::{CredentialStore, TOKEN_COOKIE};
use client::util::auth::{GuardOutcome, LOGIN_PATH, guard, is_guarded_path, login_redirect};

/// Credential store over a request's cookie jar.
#[derive(Clone, Debug)]
pub struct JarCredentials {
    jar: CookieJar,
}

impl JarCredentials {
    #[must_use]
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::new(CookieJar::from_headers(headers))
    }
}

impl CredentialStore for JarCredentials {
    fn token(&self) -> Option<String> {
        self.jar.get(TOKEN_COOKIE).map(Cookie::value).map(str::to_owned)
    }
}

/// Middleware: redirect guarded pages to `/login` without a credential, and
/// `/login` to `/` with one. Every other path passes through untouched.
pub async fn require_credential(jar: CookieJar, request: Request, next: Next) -> Response {
    let store = JarCredentials::new(jar);
    let path = request.uri().path().to_owned();

    if path == LOGIN_PATH {
        if let Some(target) = login_redirect(&store) {
            return Redirect::to(target).into_response();
        }
        return next.run(request).await;
    }

    if !is_guarded_path(&path) {
        return next.run(request).await;
    }

    match guard(&store, request, |request| request) {
        GuardOutcome::Render(request) => next.run(request).await,
        GuardOutcome::Redirect(target) => {
            tracing::debug!(%path, %target, "no credential, redirecting");
            Redirect::to(target).into_response()
        }
    }
}
