//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Page routes sit behind the credential
//! middleware; anything unmatched redirects to `/not-found`.

pub mod blogs;
pub mod guard;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use client::state::auth::CredentialProvider;
use client::util::auth::NOT_FOUND_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes used by the hydrated app.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/blogs/{id}", get(blogs::get_blog))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API-only router, used when the Leptos site configuration is unavailable.
pub fn app(state: AppState) -> Router {
    api_routes(state)
        .fallback(redirect_to_not_found)
        .layer(TraceLayer::new_for_http())
}

/// Put a credential store over the current request's cookies into context.
fn provide_request_credentials() {
    if let Some(parts) = use_context::<axum::http::request::Parts>() {
        provide_context(CredentialProvider::new(guard::JarCredentials::from_headers(&parts.headers)));
    }
}

/// Leptos SSR frontend: API routes + guarded SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, provide_request_credentials, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(middleware::from_fn(guard::require_credential));

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(redirect_to_not_found)
        .layer(TraceLayer::new_for_http()))
}

/// Unconditional fallback: every unmatched path goes to `/not-found`.
async fn redirect_to_not_found(OriginalUri(uri): OriginalUri) -> Response {
    // Without the SSR page the target is unmatched too; stop instead of looping.
    if uri.path() == NOT_FOUND_PATH {
        return (StatusCode::NOT_FOUND, "Page Not Found").into_response();
    }
    Redirect::to(NOT_FOUND_PATH).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
