//! `localStorage`-backed preference store.

use std::rc::Rc;

use sitefx_core::{MemoryPreferences, PreferenceStore, PrefsError};
use web_sys::Storage;

use crate::dom;

pub struct LocalStoragePreferences {
    storage: Storage,
}

impl LocalStoragePreferences {
    /// # Errors
    /// Returns an error when the browser blocks `localStorage` (private mode, sandboxed frames).
    pub fn open() -> Result<Self, dom::DomError> {
        Ok(Self {
            storage: dom::local_storage()?,
        })
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| PrefsError::Storage(dom::js_error_message(&err)))
    }
}

/// Browser storage when available, otherwise an in-memory store that lasts for
/// this page view.
#[must_use]
pub fn default_store() -> Rc<dyn PreferenceStore> {
    match LocalStoragePreferences::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("preferences will not persist: {err}");
            Rc::new(MemoryPreferences::new())
        }
    }
}
