use super::*;

#[test]
fn task_endpoint_formats_expected_path() {
    assert_eq!(task_endpoint("t42"), "/tasks/t42");
}
