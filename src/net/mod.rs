//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the one adapter every request goes through, `auth` and `tasks`
//! are the endpoint modules, `types` defines the shared wire schema, and
//! `error` the failure taxonomy.

pub mod auth;
pub mod error;
pub mod http;
pub mod tasks;
pub mod types;
