//! Route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages orchestrate: they read the session from
//! context, drive the network modules, and hand presentation to components.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
