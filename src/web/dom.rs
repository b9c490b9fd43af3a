//! DOM lookups and inline-style writes.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use crate::error::ScrollscapeError;
use crate::overlay::{TitleReveal, TitleStyle};
use crate::util::Color;

/// Selector of the render canvas.
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
/// Selector of the title elements, in section order.
pub const TITLE_SELECTOR: &str = ".title";
/// Canvas attribute holding an options JSON override.
pub const OPTIONS_ATTRIBUTE: &str = "data-options";

/// The render canvas.
///
/// # Errors
///
/// Returns [`ScrollscapeError::Dom`] if no `canvas.webgl` exists.
pub fn canvas(document: &Document) -> Result<HtmlCanvasElement, ScrollscapeError> {
    document
        .query_selector(CANVAS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| ScrollscapeError::Dom(format!("missing {CANVAS_SELECTOR}")))
}

/// Every `.title` element. Missing or malformed nodes are skipped.
#[must_use]
pub fn titles(document: &Document) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(TITLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Top edge of each element relative to the viewport, in CSS pixels.
#[must_use]
pub fn viewport_tops(elements: &[HtmlElement]) -> Vec<f32> {
    elements
        .iter()
        .map(|el| el.get_bounding_client_rect().top() as f32)
        .collect()
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("failed to set {property}: {e:?}");
    }
}

/// Page background behind the transparent canvas.
pub fn set_background(document: &Document, color: Color) {
    if let Some(body) = document.body() {
        set_style(&body, "background-color", &color.to_hex());
    }
}

/// Entrance opacity/offset plus the pulse color and glow.
pub fn apply_title(el: &HtmlElement, reveal: &TitleReveal, style: &TitleStyle) {
    set_style(el, "opacity", &format!("{:.3}", reveal.opacity));
    set_style(el, "transform", &format!("translateY({:.1}px)", reveal.offset_y));
    set_style(el, "color", &style.css_color());
    set_style(el, "text-shadow", &style.css_text_shadow());
}
