//! Contact form feedback: floating labels, live email validation and an
//! optimistic "sent" banner.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use sitefx_core::constants::{
    PENDING_BUTTON_HTML, PENDING_INPUT_VALUE, SUCCESS_MESSAGE_MS, SUCCESS_MESSAGE_TEXT,
};
use sitefx_core::{PageConfig, validate_email};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{self, DomError};

pub const LABEL_ACTIVE_CLASS: &str = "active";
pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";
pub const SUCCESS_CLASS: &str = "form-success";

/// # Errors
/// Returns an error if the form's fields cannot be queried or a listener is refused.
pub fn init(config: &Rc<PageConfig>) -> Result<(), DomError> {
    let Some(form) = dom::element_by_id(&config.contact_form_id)? else {
        log::debug!("no #{} form on this page", config.contact_form_id);
        return Ok(());
    };
    init_floating_labels(&form)?;
    if let Some(email) = dom::element_by_id(&config.email_field_id)? {
        init_email_validation(&email)?;
    }
    init_submit_feedback(&form)
}

fn field_value(field: &Element) -> Option<String> {
    field
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| {
            field
                .dyn_ref::<HtmlTextAreaElement>()
                .map(HtmlTextAreaElement::value)
        })
}

/// Label explicitly bound with `for`, otherwise a `<label>` directly beside the field.
fn label_for(form: &Element, field: &Element) -> Result<Option<Element>, DomError> {
    let id = field.id();
    if !id.is_empty()
        && let Some(label) = form.query_selector(&format!("label[for=\"{id}\"]"))?
    {
        return Ok(Some(label));
    }
    let is_label = |el: &Element| el.tag_name().eq_ignore_ascii_case("label");
    Ok(field
        .previous_element_sibling()
        .filter(is_label)
        .or_else(|| field.next_element_sibling().filter(is_label)))
}

fn init_floating_labels(form: &Element) -> Result<(), DomError> {
    for field in dom::query_all(form, "input, textarea")? {
        let Some(label) = label_for(form, &field)? else {
            continue;
        };
        if field_value(&field).is_some_and(|v| !v.is_empty()) {
            dom::set_class(&label, LABEL_ACTIVE_CLASS, true);
        }

        let focused = label.clone();
        dom::listen(&field, "focus", move |_| {
            dom::set_class(&focused, LABEL_ACTIVE_CLASS, true);
        })?;

        let blurred = label;
        let source = field.clone();
        dom::listen(&field, "blur", move |_| {
            if field_value(&source).is_none_or(|v| v.is_empty()) {
                dom::set_class(&blurred, LABEL_ACTIVE_CLASS, false);
            }
        })?;
    }
    Ok(())
}

/// Reflect the current email value as `valid`/`invalid` classes.
pub fn apply_email_validity(field: &Element) {
    let validity = validate_email(&field_value(field).unwrap_or_default());
    dom::set_class(field, INVALID_CLASS, validity.marks_invalid());
    dom::set_class(field, VALID_CLASS, validity.marks_valid());
}

fn init_email_validation(field: &Element) -> Result<(), DomError> {
    let source = field.clone();
    dom::listen(field, "input", move |_| apply_email_validity(&source))
}

fn init_submit_feedback(form: &Element) -> Result<(), DomError> {
    let source = form.clone();
    // Native submission proceeds; the banner is shown regardless of outcome.
    dom::listen(form, "submit", move |_| {
        if let Err(err) = show_pending(&source) {
            log::error!("form feedback failed: {err}");
        }
    })
}

const SUBMIT_SELECTOR: &str =
    "button[type=\"submit\"], button:not([type]), input[type=\"submit\"]";

fn show_pending(form: &Element) -> Result<(), DomError> {
    if let Some(control) = form.query_selector(SUBMIT_SELECTOR)? {
        if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
            button.set_inner_html(PENDING_BUTTON_HTML);
            button.set_disabled(true);
        } else if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            // Inputs cannot hold the spinner markup.
            input.set_value(PENDING_INPUT_VALUE);
            input.set_disabled(true);
        }
    }

    let banner = dom::create_html("div", None, SUCCESS_CLASS)?;
    banner.set_attribute("role", "status")?;
    banner.set_text_content(Some(SUCCESS_MESSAGE_TEXT));
    if let Some(parent) = form.parent_node() {
        parent.insert_before(&banner, form.next_sibling().as_ref())?;
    } else {
        form.append_child(&banner)?;
    }
    schedule_removal(banner);
    Ok(())
}

fn schedule_removal(banner: HtmlElement) {
    Timeout::new(SUCCESS_MESSAGE_MS, move || banner.remove()).forget();
}
