//! Application state shared between pages.
//!
//! ARCHITECTURE
//! ============
//! `auth` holds the injected credential stores the route guard reads.
//! `blog` holds the detail record and its load state machine.

pub mod auth;
pub mod blog;
