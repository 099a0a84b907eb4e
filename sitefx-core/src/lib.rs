//! sitefx core
//!
//! Platform-agnostic logic behind the sitefx page enhancements: scroll geometry,
//! video embed parsing, email validation, the navigation menu state machine and
//! the dark-mode preference. Nothing here touches a browser; the `sitefx-web`
//! crate reads the live document and feeds it through these functions.

pub mod config;
pub mod constants;
pub mod email;
pub mod error;
pub mod menu;
pub mod prefs;
pub mod scroll;
pub mod video;

pub use config::PageConfig;
pub use email::{EmailValidity, validate_email};
pub use error::{ConfigError, PrefsError};
pub use menu::{MenuItemStyle, MenuState, anchor_scroll_top, anchor_target_id};
pub use prefs::{ColorMode, DarkModePreference, MemoryPreferences, PreferenceStore};
pub use scroll::{
    ElementBox, ScrollSnapshot, fade_in_visible, parallax_offset,
    parallax_transform, parse_speed, progress_percent, progress_width,
};
pub use video::{VideoId, aspect_padding_percent, autoplay_src, extract_video_id, is_video_host};
