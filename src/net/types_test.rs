use super::*;

// =============================================================
// Enum wire values
// =============================================================

#[test]
fn task_status_serde_matches_wire_values() {
    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_wire()));
        assert_eq!(TaskStatus::from_wire(status.as_wire()), Some(status));
    }
}

#[test]
fn task_priority_serde_matches_wire_values() {
    for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
        let json = serde_json::to_string(&priority).unwrap();
        assert_eq!(json, format!("\"{}\"", priority.as_wire()));
        assert_eq!(TaskPriority::from_wire(priority.as_wire()), Some(priority));
    }
}

#[test]
fn from_wire_rejects_unknown_values() {
    assert_eq!(TaskStatus::from_wire("archived"), None);
    assert_eq!(TaskPriority::from_wire("urgent"), None);
}

// =============================================================
// Task deserialization
// =============================================================

#[test]
fn task_deserializes_server_shape() {
    let json = r#"{
        "id": "t1",
        "title": "Write report",
        "description": null,
        "status": "in_progress",
        "priority": "high",
        "user_id": "u1",
        "due_date": "2024-01-10T00:00:00Z",
        "created_at": "2023-11-25T00:00:00Z",
        "updated_at": "2023-11-25T00:00:00Z"
    }"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.title, "Write report");
    assert_eq!(task.description, None);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.due_date.as_deref(), Some("2024-01-10T00:00:00Z"));
}

#[test]
fn user_deserializes_without_full_name() {
    let json = r#"{
        "id": "u1",
        "username": "alice",
        "email": "alice@example.com",
        "created_at": "2023-11-01T00:00:00Z",
        "updated_at": "2023-11-01T00:00:00Z"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name, None);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn minimal_draft_serializes_title_only() {
    // Unset fields must be omitted so the server assigns its own defaults.
    let draft = TaskDraft {
        title: "X".to_owned(),
        ..TaskDraft::default()
    };
    assert_eq!(serde_json::to_string(&draft).unwrap(), r#"{"title":"X"}"#);
}

#[test]
fn empty_patch_serializes_to_empty_object() {
    assert_eq!(serde_json::to_string(&TaskPatch::default()).unwrap(), "{}");
}

#[test]
fn patch_from_draft_carries_every_field() {
    let draft = TaskDraft {
        title: "Plan sprint".to_owned(),
        description: Some("with the team".to_owned()),
        status: Some(TaskStatus::Done),
        priority: Some(TaskPriority::Low),
        due_date: Some("2024-02-01".to_owned()),
    };
    let patch = TaskPatch::from_draft(&draft);
    assert_eq!(patch.title.as_deref(), Some("Plan sprint"));
    assert_eq!(patch.description.as_deref(), Some("with the team"));
    assert_eq!(patch.status, Some(TaskStatus::Done));
    assert_eq!(patch.priority, Some(TaskPriority::Low));
    assert_eq!(patch.due_date.as_deref(), Some("2024-02-01"));
}
