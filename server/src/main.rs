mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let blogs = match services::blog::HttpBlogSource::new(&config.blog_api) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "blog API client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = %config.blog_api.base_url, "blog API client initialized");

    let state = state::AppState::new(Arc::new(blogs));

    let app = match routes::leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable, serving API routes only");
            routes::app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
