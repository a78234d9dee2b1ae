//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `register_flow` holds the framework-free submit logic the
//! register page drives.

pub mod home;
pub mod login;
pub mod register;
pub mod register_flow;
