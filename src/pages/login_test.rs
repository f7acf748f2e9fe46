use super::*;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(
        validate_credentials("  alice  ", "correct-pw"),
        Ok(("alice".to_owned(), "correct-pw".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("alice", ""), Err("Enter both username and password."));
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both username and password."));
}

#[test]
fn password_is_not_trimmed() {
    // Leading/trailing spaces can be part of a password.
    assert_eq!(
        validate_credentials("alice", " pw "),
        Ok(("alice".to_owned(), " pw ".to_owned()))
    );
}
