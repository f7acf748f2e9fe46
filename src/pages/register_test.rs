use super::*;

#[test]
fn validate_registration_builds_payload() {
    let data = validate_registration("  alice ", " alice@example.com ", "pw123", "pw123").unwrap();
    assert_eq!(data.username, "alice");
    assert_eq!(data.email, "alice@example.com");
    assert_eq!(data.password, "pw123");
}

#[test]
fn validate_registration_requires_all_fields() {
    assert_eq!(
        validate_registration("", "a@b.c", "pw", "pw"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_registration("alice", "", "pw", "pw"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_registration("alice", "a@b.c", "", ""),
        Err("All fields are required.")
    );
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    assert_eq!(
        validate_registration("alice", "a@b.c", "pw1", "pw2"),
        Err("Passwords don't match")
    );
}

#[test]
fn password_whitespace_is_significant() {
    assert_eq!(
        validate_registration("alice", "a@b.c", "pw ", "pw"),
        Err("Passwords don't match")
    );
}

#[test]
fn register_error_message_prefers_server_detail() {
    let err = ApiError::Server {
        status: 400,
        detail: "Username already registered".to_owned(),
    };
    assert_eq!(register_error_message(&err), "Username already registered");
}

#[test]
fn register_error_message_falls_back_on_network_failure() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(register_error_message(&err), REGISTER_FALLBACK_MESSAGE);
}
