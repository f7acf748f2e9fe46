use super::*;

#[test]
fn api_url_joins_onto_versioned_base() {
    assert_eq!(api_url("/tasks"), "/api/v1/tasks");
    assert_eq!(api_url("/users/me"), "/api/v1/users/me");
}

#[test]
fn authorization_header_formats_bearer_credential() {
    assert_eq!(
        authorization_header(Some("abc123")),
        Some("Bearer abc123".to_owned())
    );
}

#[test]
fn authorization_header_absent_without_credential() {
    assert_eq!(authorization_header(None), None);
}
