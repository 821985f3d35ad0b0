//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding happens in the router, not inside the pages.

pub mod blog_item_details;
pub mod cart;
pub mod home;
pub mod login;
pub mod not_found;
pub mod products;
