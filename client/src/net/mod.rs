//! Network helpers.
//!
//! ARCHITECTURE
//! ============
//! `api` performs the browser-side HTTP calls. `loader` ties a fetch to the
//! detail state machine under a cancellable task handle.

pub mod api;
pub mod loader;
