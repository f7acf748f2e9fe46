use super::*;

#[test]
fn format_due_date_takes_date_part_of_timestamp() {
    assert_eq!(format_due_date(Some("2024-01-10T00:00:00Z")), "Due date: 2024-01-10");
}

#[test]
fn format_due_date_passes_plain_dates_through() {
    assert_eq!(format_due_date(Some("2024-01-10")), "Due date: 2024-01-10");
}

#[test]
fn format_due_date_placeholder_when_unset() {
    assert_eq!(format_due_date(None), "No due date");
    assert_eq!(format_due_date(Some("")), "No due date");
}

#[test]
fn badge_classes_are_distinct_per_status() {
    let classes = [
        status_badge_class(TaskStatus::Todo),
        status_badge_class(TaskStatus::InProgress),
        status_badge_class(TaskStatus::Done),
    ];
    assert_eq!(classes.len(), 3);
    assert!(classes.windows(2).all(|pair| pair[0] != pair[1]));
}
