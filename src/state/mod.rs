//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `register`, `notifications`) so pages and
//! components depend on small focused models provided via context.

pub mod auth;
pub mod notifications;
pub mod register;
