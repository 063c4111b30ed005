//! `localStorage`-backed implementation of the core key/value store.
use mindcare_core::KeyValueStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage {op} of `{key}` failed: {message}")]
    Operation {
        op: &'static str,
        key: String,
        message: String,
    },
}

/// Handle to the page's `localStorage`. Outside a browser every call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, BrowserStorageError> {
    crate::dom::local_storage()
        .map_err(|err| BrowserStorageError::Unavailable(crate::dom::js_error_message(&err)))
}

impl KeyValueStore for BrowserStore {
    type Error = BrowserStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .get_item(key)
                .map_err(|err| BrowserStorageError::Operation {
                    op: "read",
                    key: key.to_string(),
                    message: crate::dom::js_error_message(&err),
                })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(BrowserStorageError::Unavailable("not running in a browser".into()))
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|err| BrowserStorageError::Operation {
                    op: "write",
                    key: key.to_string(),
                    message: crate::dom::js_error_message(&err),
                })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(BrowserStorageError::Unavailable("not running in a browser".into()))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use mindcare_core::{LegalGate, Locale, load_locale};

    #[test]
    fn host_store_reports_unavailable() {
        let store = BrowserStore;
        assert!(matches!(store.read("k"), Err(BrowserStorageError::Unavailable(_))));
        assert!(store.write("k", "v").is_err());
    }

    #[test]
    fn consumers_degrade_without_storage() {
        assert!(LegalGate::load(&BrowserStore).is_visible());
        assert_eq!(load_locale(&BrowserStore), Locale::En);
    }
}
