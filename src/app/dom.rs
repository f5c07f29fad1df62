use leptos::prelude::*;
use web_sys::{DomRect, Element, HtmlElement};

use crate::layout::StyleDecl;

/// Writes every declaration straight onto the element, skipping a re-render.
pub fn apply_style(el: &HtmlElement, style: &StyleDecl) {
    let css = el.style();
    for (property, value) in style.iter() {
        if let Err(e) = css.set_property(property, value) {
            log::debug!("couldn't set {property}: {e:?}");
        }
    }
}

pub fn set_style_property(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("couldn't set {property}: {e:?}");
    }
}

pub fn rect(el: &Element) -> DomRect {
    el.get_bounding_client_rect()
}

pub fn viewport_height() -> Option<f64> {
    window().inner_height().ok().and_then(|h| h.as_f64())
}

pub fn viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

pub fn window_scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Locks or releases page scrolling behind an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        set_style_property(&body, "overflow", if locked { "hidden" } else { "auto" });
    }
}
