use super::*;

#[test]
fn unauthorized_carries_server_detail() {
    let err = ApiError::from_status_body(401, r#"{"detail":"Incorrect username or password"}"#);
    assert_eq!(err, ApiError::Unauthorized("Incorrect username or password".to_owned()));
    assert!(err.is_unauthorized());
}

#[test]
fn unauthorized_without_body_uses_fallback() {
    let err = ApiError::from_status_body(401, "");
    assert_eq!(err, ApiError::Unauthorized("Authentication required".to_owned()));
}

#[test]
fn domain_error_carries_status_and_detail() {
    let err = ApiError::from_status_body(400, r#"{"detail":"User with this username already exists"}"#);
    assert_eq!(
        err,
        ApiError::Server {
            status: 400,
            detail: "User with this username already exists".to_owned(),
        }
    );
    assert!(!err.is_unauthorized());
}

#[test]
fn unparseable_body_falls_back_to_status_message() {
    let err = ApiError::from_status_body(500, "<html>oops</html>");
    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            detail: "Request failed with status 500".to_owned(),
        }
    );
}

#[test]
fn display_shows_detail_verbatim() {
    let err = ApiError::from_status_body(400, r#"{"detail":"boom"}"#);
    assert_eq!(err.to_string(), "boom");
    assert_eq!(
        ApiError::Network("connection reset".to_owned()).to_string(),
        "network error: connection reset"
    );
}
