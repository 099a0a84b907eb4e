//! Persisted visitor preferences.
//!
//! The only durable state in sitefx is the dark-mode flag. It lives behind
//! [`PreferenceStore`] so the chrome widgets never reach for browser storage
//! directly and tests can run against [`MemoryPreferences`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::PrefsError;

/// Key/value storage for string preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}

/// In-memory store, used in tests and when browser storage is blocked.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon offered on the toggle: the sun switches back to light.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// The dark-mode flag bound to its storage key.
#[derive(Debug, Clone)]
pub struct DarkModePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> DarkModePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored choice, if the visitor has ever toggled.
    ///
    /// Anything other than `"true"`/`"false"` counts as unset.
    #[must_use]
    pub fn stored(&self) -> Option<ColorMode> {
        match self.store.get(&self.key)?.as_str() {
            "true" => Some(ColorMode::Dark),
            "false" => Some(ColorMode::Light),
            other => {
                log::debug!("ignoring unrecognised {} value {other:?}", self.key);
                None
            }
        }
    }

    /// Stored choice, else the system colour-scheme preference.
    #[must_use]
    pub fn initial_mode(&self, system_prefers_dark: bool) -> ColorMode {
        self.stored()
            .unwrap_or_else(|| ColorMode::from_dark(system_prefers_dark))
    }

    /// Persist the mode.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure.
    pub fn save(&self, mode: ColorMode) -> Result<(), PrefsError> {
        self.store.set(&self.key, mode.as_stored())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DARK_MODE_STORAGE_KEY;

    #[test]
    fn stored_value_wins_over_system() {
        let pref = DarkModePreference::new(
            MemoryPreferences::with(DARK_MODE_STORAGE_KEY, "false"),
            DARK_MODE_STORAGE_KEY,
        );
        assert_eq!(pref.initial_mode(true), ColorMode::Light);
    }

    #[test]
    fn system_preference_used_when_unset_or_garbled() {
        let unset = DarkModePreference::new(MemoryPreferences::new(), DARK_MODE_STORAGE_KEY);
        assert_eq!(unset.initial_mode(true), ColorMode::Dark);
        assert_eq!(unset.initial_mode(false), ColorMode::Light);

        let garbled = DarkModePreference::new(
            MemoryPreferences::with(DARK_MODE_STORAGE_KEY, "yes"),
            DARK_MODE_STORAGE_KEY,
        );
        assert_eq!(garbled.stored(), None);
        assert_eq!(garbled.initial_mode(true), ColorMode::Dark);
    }

    #[test]
    fn save_round_trips_through_shared_store() {
        let store = Rc::new(MemoryPreferences::new());
        let pref = DarkModePreference::new(Rc::clone(&store), DARK_MODE_STORAGE_KEY);
        pref.save(ColorMode::Dark).expect("save");
        assert_eq!(store.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));
        assert_eq!(pref.stored(), Some(ColorMode::Dark));
        pref.save(ColorMode::Dark.toggled()).expect("save");
        assert_eq!(store.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn icons_offer_the_other_mode() {
        assert_eq!(ColorMode::Light.icon_class(), "fa-moon");
        assert_eq!(ColorMode::Dark.icon_class(), "fa-sun");
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
    }
}
