//! Mobile menu toggling and smooth in-page anchor navigation.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use sitefx_core::{MenuItemStyle, MenuState, PageConfig, anchor_scroll_top, anchor_target_id};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, DomError};

/// Class on the menu while it is open.
pub const OPEN_CLASS: &str = "active";
pub const ROTATED_CLASS: &str = "rotated";
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Wire the menu toggles and every in-page anchor.
///
/// # Errors
/// Returns an error if the document cannot be queried or a listener is refused.
pub fn init(config: &Rc<PageConfig>) -> Result<(), DomError> {
    init_menu_toggles(config)?;
    init_anchor_links(config)
}

fn init_menu_toggles(config: &Rc<PageConfig>) -> Result<(), DomError> {
    if dom::element_by_id(&config.nav_menu_id)?.is_none() {
        log::debug!("no #{} menu; mobile toggle disabled", config.nav_menu_id);
        return Ok(());
    }
    for button in dom::query_document(&config.menu_toggle_selector)? {
        let config = Rc::clone(config);
        dom::listen(&button, "click", move |_| {
            if let Err(err) = toggle_menu(&config) {
                log::error!("menu toggle failed: {err}");
            }
        })?;
    }
    Ok(())
}

/// Current state of a menu element.
#[must_use]
pub fn menu_state(menu: &Element) -> MenuState {
    MenuState::from_open(menu.class_list().contains(OPEN_CLASS))
}

/// Flip the navigation menu between open and closed.
///
/// # Errors
/// Returns an error if the menu is missing or its items cannot be styled.
pub fn toggle_menu(config: &PageConfig) -> Result<MenuState, DomError> {
    let Some(menu) = dom::element_by_id(&config.nav_menu_id)? else {
        return Ok(MenuState::Closed);
    };
    let next = menu_state(&menu).toggled();
    set_menu_state(config, &menu, next)?;
    Ok(next)
}

/// Put the menu, its toggle buttons and its items into `state`.
///
/// # Errors
/// Returns an error if an item's style cannot be written.
pub fn set_menu_state(
    config: &PageConfig,
    menu: &Element,
    state: MenuState,
) -> Result<(), DomError> {
    dom::set_class(menu, OPEN_CLASS, state.is_open());
    for button in dom::query_document(&config.menu_toggle_selector)? {
        update_toggle_button(&button, state)?;
    }
    for (index, item) in dom::query_all(menu, &config.menu_item_selector)?
        .into_iter()
        .enumerate()
    {
        let Ok(item) = item.dyn_into::<HtmlElement>() else {
            continue;
        };
        let style = state.item_style(u32::try_from(index).unwrap_or(u32::MAX));
        if state.is_open() {
            apply_item_style(&item, &MenuItemStyle::HIDDEN)?;
            schedule_reveal(menu.clone(), item, style);
        } else {
            apply_item_style(&item, &style)?;
        }
    }
    Ok(())
}

fn update_toggle_button(button: &Element, state: MenuState) -> Result<(), DomError> {
    if let Some(icon) = button.query_selector("i")? {
        let other = state.toggled().icon_class();
        let list = icon.class_list();
        list.remove_1(other)?;
        list.add_1(state.icon_class())?;
    }
    dom::set_class(button, ROTATED_CLASS, state.is_open());
    button.set_attribute("aria-expanded", if state.is_open() { "true" } else { "false" })?;
    Ok(())
}

// A reveal that lands after the menu closed again must not resurrect the item.
fn schedule_reveal(menu: Element, item: HtmlElement, style: MenuItemStyle) {
    Timeout::new(style.delay_ms, move || {
        if menu_state(&menu).is_open()
            && let Err(err) = apply_item_style(&item, &style)
        {
            log::debug!("menu item reveal skipped: {err}");
        }
    })
    .forget();
}

fn apply_item_style(item: &HtmlElement, style: &MenuItemStyle) -> Result<(), DomError> {
    let css = item.style();
    for (name, value) in [("opacity", style.opacity), ("transform", style.transform)] {
        match value {
            Some(value) => css.set_property(name, value)?,
            None => {
                css.remove_property(name)?;
            }
        }
    }
    Ok(())
}

fn init_anchor_links(config: &Rc<PageConfig>) -> Result<(), DomError> {
    for link in dom::query_document(&config.anchor_selector)? {
        let config = Rc::clone(config);
        let target = link.clone();
        dom::listen(&link, "click", move |event| {
            // Suppressed even when the target id is missing; such links do nothing.
            event.prevent_default();
            if let Err(err) = follow_anchor(&config, &target) {
                log::error!("anchor navigation failed: {err}");
            }
        })?;
    }
    Ok(())
}

/// Close the menu, mark `link` active, and smooth-scroll to its target.
///
/// # Errors
/// Returns an error if the window, history or document cannot be accessed.
pub fn follow_anchor(config: &PageConfig, link: &Element) -> Result<(), DomError> {
    if let Some(menu) = dom::element_by_id(&config.nav_menu_id)?
        && menu_state(&menu).is_open()
    {
        set_menu_state(config, &menu, MenuState::Closed)?;
    }

    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let Some(target) = anchor_target_id(&href)
        .map(dom::element_by_id)
        .transpose()?
        .flatten()
    else {
        log::debug!("anchor {href} has no target");
        return Ok(());
    };

    for other in dom::query_document(&config.anchor_selector)? {
        dom::set_class(&other, ACTIVE_LINK_CLASS, false);
    }
    dom::set_class(link, ACTIVE_LINK_CLASS, true);

    let win = dom::window()?;
    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        win.scroll_y()?,
        config.header_offset_px,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    win.history()?
        .push_state_with_url(&JsValue::NULL, "", Some(href.as_str()))?;
    Ok(())
}
