//! Timing and geometry constants shared by every page enhancement.
//!
//! Keeping them together means the feel of the page can only change through
//! reviewed code, never through markup.

// Scroll effects -----------------------------------------------------------
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// Navigation ---------------------------------------------------------------
pub const HEADER_OFFSET_PX: f64 = 60.0;
pub const MENU_STAGGER_STEP_MS: u32 = 100;
pub const MENU_ITEM_HIDDEN_TRANSFORM: &str = "translateY(-10px)";
pub const MENU_ITEM_SHOWN_TRANSFORM: &str = "translateY(0)";

// Chrome -------------------------------------------------------------------
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";
pub const DARK_MODE_TRANSITION: &str = "background-color 0.5s ease, color 0.5s ease";
pub const DARK_MODE_TRANSITION_MS: u32 = 500;

// Forms --------------------------------------------------------------------
pub const SUCCESS_MESSAGE_MS: u32 = 5_000;
pub const SUCCESS_MESSAGE_TEXT: &str = "Thank you! Your message has been sent.";
pub const PENDING_BUTTON_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
pub const PENDING_INPUT_VALUE: &str = "Sending...";

// Media --------------------------------------------------------------------
pub const VIDEO_ID_LEN: usize = 11;
/// 16:9 expressed as `padding-bottom` percent.
pub const DEFAULT_ASPECT_PADDING: f64 = 56.25;
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";
