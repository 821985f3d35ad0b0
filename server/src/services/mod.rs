//! Service layer for outbound integrations.
//!
//! DESIGN
//! ======
//! Services own transport details and error mapping; route handlers only
//! translate service errors into HTTP statuses.

pub mod blog;
