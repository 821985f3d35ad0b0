//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! blog source sits behind a trait object so tests swap in a stub.

use std::sync::Arc;

use crate::services::blog::BlogSource;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogSource>,
}

impl AppState {
    #[must_use]
    pub fn new(blogs: Arc<dyn BlogSource>) -> Self {
        Self { blogs }
    }
}
