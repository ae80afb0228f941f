//! Console preferences remembered in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only presentation preferences are stored; records are always re-fetched
//! from the server. Values are JSON-encoded under `procura.*` keys. Outside
//! the browser every read misses and every write is dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Rows per page chosen in the table footer.
pub const PAGE_SIZE_KEY: &str = "procura.page_size";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the preference stored under `key`.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, best-effort.
pub fn store<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        if let (Some(storage), Ok(raw)) = (storage(), serde_json::to_string(value)) {
            let _ = storage.set_item(key, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
