use super::*;

// =============================================================
// Cookie attribute policy
// =============================================================

#[test]
fn set_cookie_carries_required_attributes() {
    let cookie = format_set_cookie("token", "abc123", TOKEN_TTL, false);
    assert_eq!(cookie, "token=abc123; Max-Age=604800; Path=/; SameSite=Lax");
}

#[test]
fn set_cookie_adds_secure_on_https_origins() {
    let cookie = format_set_cookie("token", "abc123", TOKEN_TTL, true);
    assert!(cookie.ends_with("; Secure"), "got: {cookie}");
}

#[test]
fn ttl_is_seven_days() {
    assert_eq!(TOKEN_TTL.as_secs(), 7 * 24 * 60 * 60);
}

#[test]
fn clear_cookie_expires_immediately() {
    assert_eq!(format_clear_cookie("token"), "token=; Max-Age=0; Path=/; SameSite=Lax");
}

// =============================================================
// document.cookie parsing
// =============================================================

#[test]
fn cookie_value_finds_token_among_others() {
    let cookies = "theme=dark; token=xyz789; lang=en";
    assert_eq!(cookie_value(cookies, "token"), Some("xyz789".to_owned()));
}

#[test]
fn cookie_value_handles_missing_and_empty() {
    assert_eq!(cookie_value("theme=dark", "token"), None);
    assert_eq!(cookie_value("token=; theme=dark", "token"), None);
    assert_eq!(cookie_value("", "token"), None);
}

#[test]
fn cookie_value_does_not_match_suffix_names() {
    assert_eq!(cookie_value("csrf_token=abc", "token"), None);
}

// =============================================================
// Memory store used by controller tests
// =============================================================

#[test]
fn memory_store_overwrites_and_removes() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
    store.set("first", TOKEN_TTL);
    store.set("second", TOKEN_TTL);
    assert_eq!(store.get(), Some("second".to_owned()));
    store.remove();
    store.remove();
    assert_eq!(store.get(), None);
}
