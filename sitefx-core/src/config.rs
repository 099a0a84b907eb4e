//! The DOM contract: every id, class and selector the enhancements look for.
//!
//! Hosts can override any subset with a JSON object; omitted fields keep their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{BACK_TO_TOP_THRESHOLD_PX, DARK_MODE_STORAGE_KEY, HEADER_OFFSET_PX};
use crate::error::ConfigError;

/// Id of the `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "sitefx-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav_menu_id: String,
    pub menu_toggle_selector: String,
    pub menu_item_selector: String,
    pub anchor_selector: String,
    pub parallax_selector: String,
    pub fade_in_selector: String,
    pub hero_id: String,
    pub progress_bar_id: String,
    pub back_to_top_id: String,
    pub dark_mode_toggle_id: String,
    pub contact_form_id: String,
    pub email_field_id: String,
    pub storage_key: String,
    pub header_offset_px: f64,
    pub back_to_top_threshold_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_menu_id: "nav-menu".into(),
            menu_toggle_selector: ".mobile-menu-toggle".into(),
            menu_item_selector: "li".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            parallax_selector: ".parallax".into(),
            fade_in_selector: ".fade-in".into(),
            hero_id: "hero".into(),
            progress_bar_id: "scroll-progress".into(),
            back_to_top_id: "back-to-top".into(),
            dark_mode_toggle_id: "dark-mode-toggle".into(),
            contact_form_id: "contact-form".into(),
            email_field_id: "email".into(),
            storage_key: DARK_MODE_STORAGE_KEY.into(),
            header_offset_px: HEADER_OFFSET_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, an id is empty, or a pixel
    /// value is negative or non-finite.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // An empty id would match every id-less element.
        for (field, value) in [
            ("nav_menu_id", &self.nav_menu_id),
            ("hero_id", &self.hero_id),
            ("progress_bar_id", &self.progress_bar_id),
            ("back_to_top_id", &self.back_to_top_id),
            ("dark_mode_toggle_id", &self.dark_mode_toggle_id),
            ("contact_form_id", &self.contact_form_id),
            ("email_field_id", &self.email_field_id),
            ("storage_key", &self.storage_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        for (field, value) in [
            ("header_offset_px", self.header_offset_px),
            ("back_to_top_threshold_px", self.back_to_top_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Config from an optional override block, falling back to defaults.
    #[must_use]
    pub fn from_optional_json(json: Option<&str>) -> Self {
        let Some(raw) = json.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("ignoring invalid sitefx config: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config =
            PageConfig::from_json(r#"{"contact_form_id":"signup","header_offset_px":80}"#)
                .expect("valid config");
        assert_eq!(config.contact_form_id, "signup");
        assert!((config.header_offset_px - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.nav_menu_id, "nav-menu");
        assert_eq!(config.storage_key, "darkMode");
    }

    #[test]
    fn rejects_negative_offsets() {
        let err = PageConfig::from_json(r#"{"header_offset_px":-1}"#).expect_err("negative");
        assert!(err.to_string().contains("header_offset_px"));
    }

    #[test]
    fn rejects_empty_ids() {
        let err = PageConfig::from_json(r#"{"hero_id":""}"#).expect_err("empty hero id");
        assert!(matches!(err, ConfigError::Empty { field: "hero_id" }));
        assert_eq!(
            PageConfig::from_optional_json(Some(r#"{"hero_id":"  "}"#)).hero_id,
            "hero"
        );
    }

    #[test]
    fn optional_json_falls_back() {
        assert_eq!(PageConfig::from_optional_json(None), PageConfig::default());
        assert_eq!(PageConfig::from_optional_json(Some("  ")), PageConfig::default());
        assert_eq!(PageConfig::from_optional_json(Some("{not json")), PageConfig::default());
        assert_eq!(
            PageConfig::from_optional_json(Some(r#"{"hero_id":"top"}"#)).hero_id,
            "top"
        );
    }
}
