use super::*;

// =============================================================
// Decision table: (credential present, auth page) -> outcome
// =============================================================

#[test]
fn protected_path_without_token_redirects_to_login() {
    assert_eq!(evaluate("/dashboard", false), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate("/profile", false), GuardOutcome::RedirectToLogin);
}

#[test]
fn auth_page_without_token_is_allowed() {
    assert_eq!(evaluate("/login", false), GuardOutcome::Allow);
    assert_eq!(evaluate("/register", false), GuardOutcome::Allow);
}

#[test]
fn auth_page_with_token_redirects_to_dashboard() {
    assert_eq!(evaluate("/login", true), GuardOutcome::RedirectToDashboard);
    assert_eq!(evaluate("/register", true), GuardOutcome::RedirectToDashboard);
}

#[test]
fn protected_path_with_token_is_allowed() {
    assert_eq!(evaluate("/dashboard", true), GuardOutcome::Allow);
    assert_eq!(evaluate("/profile/settings", true), GuardOutcome::Allow);
}

// =============================================================
// Pattern matching details
// =============================================================

#[test]
fn sub_paths_of_protected_prefixes_are_guarded() {
    assert_eq!(evaluate("/dashboard/archive", false), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate("/profile/settings", false), GuardOutcome::RedirectToLogin);
}

#[test]
fn prefix_lookalikes_are_not_guarded() {
    assert_eq!(evaluate("/dashboards", false), GuardOutcome::Allow);
    assert_eq!(evaluate("/profiles/u1", false), GuardOutcome::Allow);
}

#[test]
fn unmatched_paths_are_never_intercepted() {
    for path in ["/", "/about", "/login/reset", "/tasks", ""] {
        assert_eq!(evaluate(path, false), GuardOutcome::Allow, "path: {path}");
        assert_eq!(evaluate(path, true), GuardOutcome::Allow, "path: {path}");
    }
}
