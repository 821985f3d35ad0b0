//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the `Protected` component and the server page middleware call
//! [`guard`], so client-side navigation and the initial server render apply
//! identical redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::CredentialStore;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const NOT_FOUND_PATH: &str = "/not-found";

/// Page paths that require a credential.
pub const GUARDED_PATHS: [&str; 3] = ["/", "/products", "/cart"];

/// Result of evaluating the guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome<V> {
    Render(V),
    Redirect(&'static str),
}

/// Render `view(props)` when a credential is present, otherwise redirect to
/// [`LOGIN_PATH`]. `props` reach `view` untouched; `view` is not called on
/// redirect.
pub fn guard<S, P, V, F>(store: &S, props: P, view: F) -> GuardOutcome<V>
where
    S: CredentialStore + ?Sized,
    F: FnOnce(P) -> V,
{
    if store.has_token() {
        GuardOutcome::Render(view(props))
    } else {
        GuardOutcome::Redirect(LOGIN_PATH)
    }
}

/// Where the login page should send an already-authenticated visitor.
pub fn login_redirect<S>(store: &S) -> Option<&'static str>
where
    S: CredentialStore + ?Sized,
{
    store.has_token().then_some(HOME_PATH)
}

/// Whether `path` is one of the exact-match guarded page paths.
#[must_use]
pub fn is_guarded_path(path: &str) -> bool {
    GUARDED_PATHS.contains(&path)
}
