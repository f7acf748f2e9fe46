//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps navigation-policy concerns out of page and component logic.

pub mod route_guard;
