//! Persistent token store backed by `localStorage`.
//!
//! One named slot holds the bearer token across page reloads within a
//! browser profile. Reads and writes are synchronous, so a `set` or
//! `clear` is visible to the very next outbound request in the same
//! tab. Only the session flows and the 401 interceptor mutate the
//! slot. Requires a browser environment; off the `csr` feature the
//! store reads as empty.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "journal_app_jwt";

/// Read the stored bearer token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store the bearer token.
pub fn set(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the stored token. Absence means unauthenticated.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
