//! Session persistence in browser `localStorage`.
//!
//! The keys are shared with the login page served before the app loads,
//! so they stay short and unprefixed. On non-wasm targets an in-memory
//! map stands in for `localStorage`, which keeps this module testable
//! with plain `cargo test`.

const ACCESS_TOKEN_KEY: &str = "access_token";
const USERNAME_KEY: &str = "username";

#[cfg(target_arch = "wasm32")]
fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn write_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
fn read_item(key: &str) -> Option<String> {
    STORE.with(|store| store.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_item(key: &str, value: &str) {
    STORE.with(|store| {
        store.borrow_mut().insert(key.to_string(), value.to_string());
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_item(key: &str) {
    STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    write_item(ACCESS_TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    read_item(ACCESS_TOKEN_KEY)
}

/// Save username to localStorage
pub fn save_username(username: &str) {
    write_item(USERNAME_KEY, username);
}

/// Get username from localStorage
pub fn get_username() -> Option<String> {
    read_item(USERNAME_KEY)
}

/// Remove both session keys
pub fn clear_session() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(USERNAME_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        clear_session();
        assert_eq!(get_access_token(), None);

        save_access_token("abc123");
        assert_eq!(get_access_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_username_round_trip() {
        clear_session();
        assert_eq!(get_username(), None);

        save_username("alice");
        assert_eq!(get_username().as_deref(), Some("alice"));
    }

    #[test]
    fn test_clear_session_removes_both_keys() {
        save_access_token("abc123");
        save_username("alice");

        clear_session();

        assert_eq!(get_access_token(), None);
        assert_eq!(get_username(), None);
    }

    #[test]
    fn test_clear_session_on_empty_store_is_a_no_op() {
        clear_session();
        clear_session();
        assert_eq!(get_access_token(), None);
    }
}
