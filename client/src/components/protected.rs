//! Route-guard wrapper for views that require a credential.
//!
//! DESIGN
//! ======
//! The guard reads the `CredentialProvider` from context instead of the
//! cookie jar directly, so SSR and tests decide what "logged in" means.

#[cfg(all(test, feature = "ssr"))]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::CredentialProvider;
use crate::util::auth::{GuardOutcome, guard};

/// Render `children` when a credential is present, otherwise redirect to
/// `/login`. Falls back to the browser cookie store when no provider was
/// placed in context.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let credentials = use_context::<CredentialProvider>().unwrap_or_else(CredentialProvider::browser);
    match guard(&credentials, children, |children| children()) {
        GuardOutcome::Render(view) => view.into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
