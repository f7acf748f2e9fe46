use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: None,
        created_at: "2023-11-01T00:00:00Z".to_owned(),
        updated_at: "2023-11-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn default_state_is_unknown_and_loading() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Unknown);
}

#[test]
fn resolved_user_is_authenticated() {
    let state = SessionState {
        user: Some(sample_user()),
        loading: false,
        error: None,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn resolved_without_user_is_unauthenticated() {
    let state = SessionState {
        user: None,
        loading: false,
        error: Some("Incorrect username or password".to_owned()),
    };
    assert!(!state.is_authenticated());
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn error_slot_does_not_affect_phase() {
    let state = SessionState {
        user: Some(sample_user()),
        loading: false,
        error: Some("stale".to_owned()),
    };
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}
