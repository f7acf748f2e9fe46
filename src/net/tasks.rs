//! Task CRUD operations against the `/tasks` collection.
//!
//! Five direct passthroughs: one request per call, no caching, batching, or
//! conflict resolution. The server's response is returned unmodified and its
//! errors propagate verbatim.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::error::ApiError;
use super::http;
use super::types::{Task, TaskDraft, TaskPatch};

fn task_endpoint(id: &str) -> String {
    format!("/tasks/{id}")
}

/// List the caller's tasks via `GET /tasks`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the adapter.
pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    http::get_json("/tasks").await
}

/// Fetch one task via `GET /tasks/{id}`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the adapter.
pub async fn fetch_task(id: &str) -> Result<Task, ApiError> {
    http::get_json(&task_endpoint(id)).await
}

/// Create a task via `POST /tasks`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the adapter.
pub async fn create_task(draft: &TaskDraft) -> Result<Task, ApiError> {
    http::post_json("/tasks", draft).await
}

/// Update a task via `PUT /tasks/{id}`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the adapter.
pub async fn update_task(id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
    http::put_json(&task_endpoint(id), patch).await
}

/// Delete a task via `DELETE /tasks/{id}`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the adapter.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    http::delete(&task_endpoint(id)).await
}
