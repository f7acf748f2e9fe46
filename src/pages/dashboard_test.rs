use super::*;

#[test]
fn welcome_label_includes_username() {
    assert_eq!(welcome_label(Some("alice")), "Welcome back, alice!");
}

#[test]
fn welcome_label_without_user_is_generic() {
    // The session can still be resolving when the page first renders.
    assert_eq!(welcome_label(None), "Welcome back!");
}

#[test]
fn no_dialog_is_open_by_default() {
    assert_eq!(Dialog::default(), Dialog::None);
}
