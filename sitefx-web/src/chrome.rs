//! Fixed page widgets created on demand: dark-mode toggle, scroll-progress bar
//! and back-to-top button.
//!
//! Every `create_*` function returns `Ok(false)` without touching the page when
//! an element with its id already exists, so repeated initialisation never
//! duplicates a widget.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use sitefx_core::constants::{DARK_MODE_TRANSITION, DARK_MODE_TRANSITION_MS};
use sitefx_core::{ColorMode, DarkModePreference, PageConfig, PreferenceStore};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, DomError};

pub const DARK_MODE_CLASS: &str = "dark-mode";

fn icon_html(icon: &str) -> String {
    format!("<i class=\"fas {icon}\"></i>")
}

/// # Errors
/// Returns an error if the document body is missing or the bar cannot be styled.
pub fn create_progress_bar(config: &PageConfig) -> Result<bool, DomError> {
    if dom::element_by_id(&config.progress_bar_id)?.is_some() {
        return Ok(false);
    }
    let bar = dom::create_html("div", Some(&config.progress_bar_id), "scroll-progress")?;
    bar.set_attribute("aria-hidden", "true")?;
    dom::set_styles(
        &bar,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("height", "3px"),
            ("width", "0%"),
            ("z-index", "1000"),
        ],
    )?;
    dom::body()?.append_child(&bar)?;
    Ok(true)
}

/// # Errors
/// Returns an error if the document body is missing or the click listener is refused.
pub fn create_back_to_top(config: &PageConfig) -> Result<bool, DomError> {
    if dom::element_by_id(&config.back_to_top_id)?.is_some() {
        return Ok(false);
    }
    let button = dom::create_html("button", Some(&config.back_to_top_id), "back-to-top")?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", "Back to top")?;
    button.set_inner_html(&icon_html("fa-arrow-up"));
    dom::set_styles(
        &button,
        &[
            ("position", "fixed"),
            ("bottom", "30px"),
            ("right", "30px"),
            ("z-index", "999"),
        ],
    )?;
    dom::listen(&button, "click", |_| {
        if let Err(err) = scroll_to_top() {
            log::error!("back-to-top scroll failed: {err}");
        }
    })?;
    dom::body()?.append_child(&button)?;
    Ok(true)
}

fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn system_prefers_dark() -> bool {
    dom::window()
        .ok()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Mode currently shown by the page body.
fn mode_of(body: &HtmlElement) -> ColorMode {
    ColorMode::from_dark(body.class_list().contains(DARK_MODE_CLASS))
}

fn apply_mode(body: &HtmlElement, button: &HtmlElement, mode: ColorMode) {
    dom::set_class(body, DARK_MODE_CLASS, mode.is_dark());
    button.set_inner_html(&icon_html(mode.icon_class()));
    let _ = button.set_attribute("aria-pressed", if mode.is_dark() { "true" } else { "false" });
}

/// Create the dark-mode toggle and apply the initial mode.
///
/// The initial mode comes from `store` when the visitor has chosen before,
/// otherwise from the system colour scheme.
///
/// # Errors
/// Returns an error if the document body is missing or the toggle cannot be attached.
pub fn create_dark_mode_toggle(
    config: &PageConfig,
    store: Rc<dyn PreferenceStore>,
) -> Result<bool, DomError> {
    if dom::element_by_id(&config.dark_mode_toggle_id)?.is_some() {
        return Ok(false);
    }
    let body = dom::body()?;
    let preference = DarkModePreference::new(store, config.storage_key.clone());
    let button = dom::create_html(
        "button",
        Some(&config.dark_mode_toggle_id),
        "dark-mode-toggle",
    )?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", "Toggle dark mode")?;
    dom::set_styles(
        &button,
        &[
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("z-index", "1001"),
        ],
    )?;
    apply_mode(&body, &button, preference.initial_mode(system_prefers_dark()));

    let target = button.clone();
    let page = body.clone();
    dom::listen(&button, "click", move |_| {
        let next = mode_of(&page).toggled();
        apply_mode(&page, &target, next);
        if let Err(err) = preference.save(next) {
            log::warn!("dark mode choice not saved: {err}");
        }
        start_transition(&page);
    })?;
    body.append_child(&button)?;
    Ok(true)
}

fn start_transition(body: &HtmlElement) {
    if body
        .style()
        .set_property("transition", DARK_MODE_TRANSITION)
        .is_err()
    {
        return;
    }
    let body = body.clone();
    Timeout::new(DARK_MODE_TRANSITION_MS, move || {
        let _ = body.style().remove_property("transition");
    })
    .forget();
}
