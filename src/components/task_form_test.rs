use super::*;

#[test]
fn build_draft_requires_a_title() {
    assert_eq!(build_draft("   ", "", TaskStatus::Todo, TaskPriority::Medium, ""), None);
}

#[test]
fn build_draft_trims_and_drops_empty_optionals() {
    let draft = build_draft("  Ship it  ", "", TaskStatus::Todo, TaskPriority::Medium, "  ").unwrap();
    assert_eq!(draft.title, "Ship it");
    assert_eq!(draft.description, None);
    assert_eq!(draft.due_date, None);
    assert_eq!(draft.status, Some(TaskStatus::Todo));
    assert_eq!(draft.priority, Some(TaskPriority::Medium));
}

#[test]
fn build_draft_keeps_filled_optionals() {
    let draft = build_draft(
        "Ship it",
        "before the demo",
        TaskStatus::InProgress,
        TaskPriority::High,
        "2024-02-01",
    )
    .unwrap();
    assert_eq!(draft.description.as_deref(), Some("before the demo"));
    assert_eq!(draft.due_date.as_deref(), Some("2024-02-01"));
}

#[test]
fn due_date_input_value_strips_time_part() {
    let task = Task {
        id: "t1".to_owned(),
        title: "x".to_owned(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        user_id: "u1".to_owned(),
        due_date: Some("2024-01-10T00:00:00Z".to_owned()),
        created_at: "2023-11-01T00:00:00Z".to_owned(),
        updated_at: "2023-11-01T00:00:00Z".to_owned(),
    };
    assert_eq!(due_date_input_value(&task), "2024-01-10");
}
