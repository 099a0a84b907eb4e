//! Scroll-driven parallax, fade-in, progress bar and back-to-top visibility.

use std::rc::Rc;

use sitefx_core::scroll::{parallax_transform, progress_width};
use sitefx_core::{ElementBox, PageConfig, ScrollSnapshot, parallax_offset, parse_speed};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{self, DomError};

pub const VISIBLE_CLASS: &str = "visible";

/// Reveal the hero, run one update for the first paint, then follow every scroll.
///
/// # Errors
/// Returns an error if the window is unavailable or the scroll listener is refused.
pub fn init(config: &Rc<PageConfig>) -> Result<(), DomError> {
    if let Some(hero) = dom::element_by_id(&config.hero_id)? {
        dom::set_class(&hero, VISIBLE_CLASS, true);
    }
    apply(config)?;
    let config = Rc::clone(config);
    let win = dom::window()?;
    dom::listen_passive(&win, "scroll", move |_| {
        if let Err(err) = apply(&config) {
            log::debug!("scroll update skipped: {err}");
        }
    })
}

/// Recompute every scroll-derived effect from the current geometry.
///
/// # Errors
/// Returns an error if the geometry cannot be read or a selector is rejected.
pub fn apply(config: &PageConfig) -> Result<(), DomError> {
    let frame = dom::scroll_snapshot()?;
    update_parallax(config, frame)?;
    update_fade_ins(config, frame)?;
    update_progress(config, frame)?;
    update_back_to_top(config, frame)
}

fn update_parallax(config: &PageConfig, frame: ScrollSnapshot) -> Result<(), DomError> {
    for el in dom::query_document(&config.parallax_selector)? {
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let speed = parse_speed(el.get_attribute("data-speed").as_deref());
        let offset = parallax_offset(frame.scroll_y, speed);
        el.style()
            .set_property("transform", &parallax_transform(offset))?;
    }
    Ok(())
}

fn update_fade_ins(config: &PageConfig, frame: ScrollSnapshot) -> Result<(), DomError> {
    for el in dom::query_document(&config.fade_in_selector)? {
        if el.id() == config.hero_id {
            dom::set_class(&el, VISIBLE_CLASS, true);
            continue;
        }
        let rect = el.get_bounding_client_rect();
        let element = ElementBox {
            top: rect.top(),
            height: rect.height(),
        };
        if frame.fade_in_visible(element) {
            dom::set_class(&el, VISIBLE_CLASS, true);
        }
    }
    Ok(())
}

fn update_progress(config: &PageConfig, frame: ScrollSnapshot) -> Result<(), DomError> {
    let Some(bar) = dom::element_by_id(&config.progress_bar_id)? else {
        return Ok(());
    };
    let bar: HtmlElement = bar.dyn_into()?;
    bar.style()
        .set_property("width", &progress_width(frame.progress_percent()))?;
    Ok(())
}

fn update_back_to_top(config: &PageConfig, frame: ScrollSnapshot) -> Result<(), DomError> {
    if let Some(button) = dom::element_by_id(&config.back_to_top_id)? {
        let visible = frame.back_to_top_visible(config.back_to_top_threshold_px);
        dom::set_class(&button, VISIBLE_CLASS, visible);
    }
    Ok(())
}
