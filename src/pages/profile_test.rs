use super::*;

#[test]
fn member_since_takes_date_part() {
    assert_eq!(member_since("2024-03-01T12:30:00Z"), "2024-03-01");
}

#[test]
fn member_since_passes_through_bare_dates() {
    assert_eq!(member_since("2024-03-01"), "2024-03-01");
}
