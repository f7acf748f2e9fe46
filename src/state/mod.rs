//! Shared reactive state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! States are plain structs wrapped in `RwSignal`s at the app root; reducers
//! and derivations live here so they can be unit tested without a browser.

pub mod session;
pub mod tasks;
