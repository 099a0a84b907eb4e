use sitefx_core::ScrollSnapshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Storage, Window,
};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("`window` is unavailable")]
    NoWindow,
    #[error("`document` is unavailable")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

impl From<Element> for DomError {
    fn from(element: Element) -> Self {
        Self::Js(format!("<{}> is not an HTML element", element.tag_name()))
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`DomError::NoWindow`] outside a browser context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when no window or document is reachable.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// # Errors
/// Returns an error when the document or its `<body>` is missing.
pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()?
        .ok_or_else(|| DomError::Js("localStorage unavailable".into()))
}

/// Every element under `root` matching `selector`, in document order.
///
/// # Errors
/// Returns an error if the selector is rejected by the browser.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(collect(&root.query_selector_all(selector)?))
}

/// Document-wide variant of [`query_all`].
///
/// # Errors
/// Returns an error if the document is missing or the selector is rejected.
pub fn query_document(selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(collect(&document()?.query_selector_all(selector)?))
}

fn collect(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// # Errors
/// Returns an error if the document is missing.
pub fn element_by_id(id: &str) -> Result<Option<Element>, DomError> {
    Ok(document()?.get_element_by_id(id))
}

/// Create an HTML element with an optional id and class attribute.
///
/// # Errors
/// Returns an error if the document is missing or rejects the tag name.
pub fn create_html(tag: &str, id: Option<&str>, class: &str) -> Result<HtmlElement, DomError> {
    let el = document()?.create_element(tag)?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el.dyn_into::<HtmlElement>()?)
}

/// Apply inline style properties in order.
///
/// # Errors
/// Returns an error if the browser rejects a property.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), DomError> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Add or remove a class according to `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Attach a listener that lives as long as the page.
///
/// # Errors
/// Returns an error if the browser refuses the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a passive listener (scroll and touch) that lives as long as the page.
///
/// # Errors
/// Returns an error if the browser refuses the listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Attach a listener the browser drops after its first dispatch.
///
/// # Errors
/// Returns an error if the browser refuses the listener.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnOnce(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::<dyn FnMut(Event)>::once_into_js(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Current scroll geometry of the page.
///
/// # Errors
/// Returns an error if the window or document cannot be read.
pub fn scroll_snapshot() -> Result<ScrollSnapshot, DomError> {
    let win = window()?;
    let doc = win.document().ok_or(DomError::NoDocument)?;
    let scroll_y = win.scroll_y()?;
    let viewport_height = win.inner_height()?.as_f64().unwrap_or_default();
    let document_height = doc
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default();
    Ok(ScrollSnapshot::new(scroll_y, viewport_height, document_height))
}
