//! Browser localStorage helpers for the persisted session token and the
//! selected display language.
//!
//! TRADE-OFFS
//! ==========
//! Both entries are plain string keys with no schema versioning. Persistence
//! is best-effort browser-only behavior; native builds (tests) read nothing
//! and write nowhere so store logic stays deterministic off-browser.

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// localStorage key holding the selected language code.
pub const LANGUAGE_KEY: &str = "language";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a plain string value for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a plain string value for `key`.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove the value stored for `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Read the persisted bearer token, if any.
pub fn load_token() -> Option<String> {
    load(TOKEN_KEY)
}

/// Persist the bearer token after a successful login or registration.
pub fn save_token(token: &str) {
    save(TOKEN_KEY, token);
}

/// Drop the persisted bearer token (logout or session expiry).
pub fn clear_token() {
    remove(TOKEN_KEY);
}

/// Read the persisted language code, if any.
pub fn load_language() -> Option<String> {
    load(LANGUAGE_KEY)
}

/// Persist the selected language code.
pub fn save_language(code: &str) {
    save(LANGUAGE_KEY, code);
}
