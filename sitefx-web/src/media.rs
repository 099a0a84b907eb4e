//! Lazy images and click-to-load video embeds.

use sitefx_core::{VideoId, aspect_padding_percent, autoplay_src, extract_video_id};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlIFrameElement, Node};

use crate::dom::{self, DomError};

pub const PLACEHOLDER_CLASS: &str = "video-placeholder";
/// Marks an iframe that already has a placeholder in front of it.
pub const DEFERRED_ATTR: &str = "data-sitefx-deferred";
const ORIGINAL_SRC_ATTR: &str = "data-src";

/// Give every image without an explicit `loading` mode native lazy loading.
///
/// # Errors
/// Returns an error if the document cannot be queried.
pub fn lazy_load_images() -> Result<usize, DomError> {
    let images = dom::query_document("img:not([loading])")?;
    for img in &images {
        img.set_attribute("loading", "lazy")?;
    }
    Ok(images.len())
}

/// Swap every recognised video iframe for a thumbnail placeholder.
///
/// Iframes whose id cannot be extracted stay untouched. A failure while
/// building one placeholder is logged and the rest are still processed.
///
/// # Errors
/// Returns an error only if the document cannot be queried.
pub fn defer_video_embeds() -> Result<usize, DomError> {
    let mut deferred = 0;
    for frame in dom::query_document("iframe")? {
        let Ok(frame) = frame.dyn_into::<HtmlIFrameElement>() else {
            continue;
        };
        if frame.has_attribute(DEFERRED_ATTR) {
            continue;
        }
        let Some(id) = extract_video_id(&frame.src()) else {
            continue;
        };
        match install_placeholder(&frame, &id) {
            Ok(()) => deferred += 1,
            Err(err) => log::error!("video placeholder for {id} failed: {err}"),
        }
    }
    Ok(deferred)
}

fn install_placeholder(frame: &HtmlIFrameElement, id: &VideoId) -> Result<(), DomError> {
    let parent = frame
        .parent_node()
        .ok_or_else(|| DomError::Js("iframe is detached from the document".into()))?;
    let placeholder = build_placeholder(frame, id)?;
    let original = frame.src();
    {
        let frame = frame.clone();
        let target = placeholder.clone();
        let original = original.clone();
        dom::listen_once(&placeholder, "click", move |_| {
            if let Err(err) = activate(&frame, &target, &original) {
                log::error!("video embed could not be restored: {err}");
            }
        })?;
    }

    // The placeholder only reaches the page once the iframe is hidden behind it.
    let hidden = hide_frame(frame, &original).and_then(|()| {
        let anchor: &Node = frame;
        parent.insert_before(&placeholder, Some(anchor))?;
        Ok(())
    });
    if let Err(err) = hidden {
        restore_frame(frame, &original)?;
        return Err(err);
    }
    Ok(())
}

fn hide_frame(frame: &HtmlIFrameElement, original: &str) -> Result<(), DomError> {
    frame.set_attribute(ORIGINAL_SRC_ATTR, original)?;
    frame.set_attribute(DEFERRED_ATTR, "")?;
    frame.remove_attribute("src")?;
    frame.style().set_property("display", "none")?;
    Ok(())
}

fn restore_frame(frame: &HtmlIFrameElement, original: &str) -> Result<(), DomError> {
    frame.set_src(original);
    frame.remove_attribute(ORIGINAL_SRC_ATTR)?;
    frame.remove_attribute(DEFERRED_ATTR)?;
    frame.style().remove_property("display")?;
    Ok(())
}

fn build_placeholder(frame: &HtmlIFrameElement, id: &VideoId) -> Result<HtmlElement, DomError> {
    let width = frame.get_attribute("width");
    let height = frame.get_attribute("height");
    let padding = format!(
        "{}%",
        aspect_padding_percent(width.as_deref(), height.as_deref())
    );

    let placeholder = dom::create_html("div", None, PLACEHOLDER_CLASS)?;
    placeholder.set_attribute("role", "button")?;
    placeholder.set_attribute("aria-label", "Play video")?;
    placeholder.set_attribute("data-video-id", id.as_str())?;
    dom::set_styles(
        &placeholder,
        &[
            ("position", "relative"),
            ("width", "100%"),
            ("height", "0"),
            ("padding-bottom", padding.as_str()),
            ("overflow", "hidden"),
            ("cursor", "pointer"),
            ("background", "#000"),
        ],
    )?;

    let thumb = dom::create_html("img", None, "video-thumbnail")?;
    thumb.set_attribute("src", &id.thumbnail_url())?;
    thumb.set_attribute("alt", "Video thumbnail")?;
    thumb.set_attribute("loading", "lazy")?;
    dom::set_styles(
        &thumb,
        &[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("object-fit", "cover"),
        ],
    )?;

    let overlay = dom::create_html("div", None, "video-overlay")?;
    dom::set_styles(
        &overlay,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("background", "rgba(0, 0, 0, 0.3)"),
        ],
    )?;

    let play = dom::create_html("div", None, "video-play-button")?;
    play.set_inner_html("<i class=\"fas fa-play\"></i>");
    dom::set_styles(
        &play,
        &[
            ("position", "absolute"),
            ("top", "50%"),
            ("left", "50%"),
            ("transform", "translate(-50%, -50%)"),
            ("width", "68px"),
            ("height", "48px"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("border-radius", "12px"),
            ("background", "rgba(255, 0, 0, 0.85)"),
            ("color", "#fff"),
        ],
    )?;

    placeholder.append_child(&thumb)?;
    placeholder.append_child(&overlay)?;
    placeholder.append_child(&play)?;
    Ok(placeholder)
}

fn activate(
    frame: &HtmlIFrameElement,
    placeholder: &Element,
    original: &str,
) -> Result<(), DomError> {
    frame.set_src(&autoplay_src(original));
    frame.style().remove_property("display")?;
    placeholder.remove();
    Ok(())
}
