//! Persistent storage for the session credential.
//!
//! DESIGN
//! ======
//! Exactly one mechanism is used: a cookie named `token`, scoped to the site
//! root, same-site restricted, `Secure` on HTTPS origins, expiring after
//! seven days. The client never inspects the token's contents; it is an
//! opaque string whose validity only the server can judge.
//!
//! Cookie formatting and parsing are pure functions so the attribute policy
//! is testable without a browser. The `document.cookie` glue is hydrate-only
//! and no-ops during SSR.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::time::Duration;

/// Cookie name holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// How long a stored credential outlives the login that issued it.
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Client-side store holding at most one opaque credential.
pub trait TokenStore {
    /// Persist `token`, overwriting any previous credential.
    fn set(&self, token: &str, ttl: Duration);
    /// Read the stored credential, if any.
    fn get(&self) -> Option<String>;
    /// Remove the stored credential. Safe to call when none exists.
    fn remove(&self);
}

/// Render the `Set-Cookie`-style assignment string for storing a token.
pub fn format_set_cookie(name: &str, value: &str, ttl: Duration, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Max-Age={}; Path=/; SameSite=Lax", ttl.as_secs());
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Render the assignment string that deletes a cookie.
pub fn format_clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Lax")
}

/// Extract a cookie's value from a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

/// The one real store: the `token` cookie on `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn set(&self, token: &str, ttl: Duration) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&format_set_cookie(TOKEN_COOKIE, token, ttl, is_https_origin()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, ttl);
        }
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let doc = html_document()?;
            let cookies = doc.cookie().ok()?;
            cookie_value(&cookies, TOKEN_COOKIE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&format_clear_cookie(TOKEN_COOKIE));
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn is_https_origin() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|protocol| protocol == "https:")
}

/// In-memory store for unit tests; ignores the TTL.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str, _ttl: Duration) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn remove(&self) {
        *self.0.borrow_mut() = None;
    }
}
