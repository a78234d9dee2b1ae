//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure logic (such as the registration schema) out of
//! page and component code so it can be unit tested without a browser.

pub mod register_schema;
