//! Small pure helpers used by pages and the server crate.

pub mod auth;
pub mod cookie;
pub mod task;
