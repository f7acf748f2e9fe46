//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and task presentation while reading shared state
//! from Leptos context providers; pages own the orchestration.

pub mod navbar;
pub mod stats_card;
pub mod task_form;
pub mod task_item;
pub mod task_list;
