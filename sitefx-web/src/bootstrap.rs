//! Single entry point that wires every enhancement once the document is ready.

use std::cell::Cell;
use std::rc::Rc;

use sitefx_core::config::CONFIG_ELEMENT_ID;
use sitefx_core::{PageConfig, PreferenceStore};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::dom::{self, DomError};
use crate::{chrome, form, media, navigation, scroll_effects, storage};

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Page config from the `#sitefx-config` JSON block, or defaults.
#[must_use]
pub fn load_config() -> PageConfig {
    let raw = dom::element_by_id(CONFIG_ELEMENT_ID)
        .ok()
        .flatten()
        .and_then(|el| el.text_content());
    PageConfig::from_optional_json(raw.as_deref())
}

fn step<T>(name: &str, result: Result<T, DomError>) {
    if let Err(err) = result {
        log::error!("{name} initialisation failed: {err}");
    }
}

/// Run every initializer. Later calls are no-ops and return `false`.
pub fn init_page_with(config: PageConfig, store: Rc<dyn PreferenceStore>) -> bool {
    if BOOTED.with(|booted| booted.replace(true)) {
        return false;
    }
    let config = Rc::new(config);

    match media::lazy_load_images() {
        Ok(count) => log::debug!("{count} images set to lazy loading"),
        Err(err) => log::error!("lazy image initialisation failed: {err}"),
    }
    match media::defer_video_embeds() {
        Ok(count) => log::debug!("{count} video embeds deferred"),
        Err(err) => log::error!("video placeholder initialisation failed: {err}"),
    }
    step("scroll progress bar", chrome::create_progress_bar(&config));
    step("back-to-top button", chrome::create_back_to_top(&config));
    step("dark mode toggle", chrome::create_dark_mode_toggle(&config, store));
    step("navigation", navigation::init(&config));
    step("scroll effects", scroll_effects::init(&config));
    step("contact form", form::init(&config));

    log::info!("sitefx page enhancements ready");
    true
}

/// Initialise with the page's own config and browser storage.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn init_page() -> bool {
    init_page_with(load_config(), storage::default_store())
}

/// Call [`init_page`] now if the DOM is parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
/// Returns an error if the document is unavailable or the listener is refused.
pub fn init_when_ready() -> Result<(), DomError> {
    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        dom::listen_once(&doc, "DOMContentLoaded", |_| {
            init_page();
        })
    } else {
        init_page();
        Ok(())
    }
}
