use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_raf_fn, use_window, utils::Pausable,
    UseEventListenerOptions, UseRafFnCallbackArgs,
};
use web_sys::{HtmlElement, WheelEvent};

use super::dom::{viewport_height, window_scroll_y};
use crate::layout::inertia::{wheel_pixels, Axis, Inertia};

#[derive(Clone)]
enum Surface {
    Element(HtmlElement, Axis),
    Window,
}

impl Surface {
    fn position(&self) -> f64 {
        match self {
            Surface::Element(el, Axis::Horizontal) => el.scroll_left() as f64,
            Surface::Element(el, Axis::Vertical) => el.scroll_top() as f64,
            Surface::Window => window_scroll_y(),
        }
    }

    fn limit(&self) -> f64 {
        match self {
            Surface::Element(el, Axis::Horizontal) => (el.scroll_width() - el.client_width()) as f64,
            Surface::Element(el, Axis::Vertical) => (el.scroll_height() - el.client_height()) as f64,
            Surface::Window => document()
                .document_element()
                .map(|root| root.scroll_height() as f64 - viewport_height().unwrap_or_default())
                .unwrap_or_default(),
        }
    }

    fn page(&self) -> f64 {
        match self {
            Surface::Element(el, Axis::Horizontal) => el.client_width() as f64,
            Surface::Element(el, Axis::Vertical) => el.client_height() as f64,
            Surface::Window => viewport_height().unwrap_or_default(),
        }
    }

    fn scroll_to(&self, position: f64) {
        match self {
            Surface::Element(el, Axis::Horizontal) => {
                el.scroll_to_with_x_and_y(position, el.scroll_top() as f64)
            }
            Surface::Element(el, Axis::Vertical) => {
                el.scroll_to_with_x_and_y(el.scroll_left() as f64, position)
            }
            Surface::Window => {
                let x = window().scroll_x().unwrap_or_default();
                window().scroll_to_with_x_and_y(x, position);
            }
        }
    }
}

fn feed(
    ev: &WheelEvent,
    surface: Option<Surface>,
    axis: Axis,
    inertia: StoredValue<Inertia>,
    enabled: Signal<bool>,
) {
    if !enabled.get_untracked() {
        return;
    }
    let Some(surface) = surface else {
        return;
    };
    let limit = surface.limit();
    if limit <= 0.0 {
        return;
    }
    ev.prevent_default();
    let delta = wheel_pixels(
        axis.wheel_delta(ev.delta_x(), ev.delta_y()),
        ev.delta_mode(),
        surface.page(),
    );
    let position = surface.position();
    inertia.update_value(|i| i.push(delta, position, limit));
}

/// Per-frame driver. The frame callback lives exactly as long as the owning
/// component and only runs while `enabled` holds.
fn drive<S>(surface: S, inertia: StoredValue<Inertia>, enabled: Signal<bool>)
where
    S: Fn() -> Option<Surface> + 'static,
{
    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(position) = inertia.try_update_value(|i| i.step(args.delta)).flatten() else {
            return;
        };
        if let Some(surface) = surface() {
            surface.scroll_to(position);
        }
    });

    Effect::new(move |_| {
        if enabled.get() {
            resume();
        } else {
            inertia.update_value(Inertia::stop);
            pause();
        }
    });
}

/// Smooth wheel scrolling for a scroll container.
pub fn use_smooth_scroll(target: NodeRef<html::Div>, axis: Axis, enabled: Signal<bool>) {
    let inertia = StoredValue::new(Inertia::default());
    let surface = move || {
        target
            .get_untracked()
            .map(|el| Surface::Element(HtmlElement::from(el), axis))
    };

    let _ = use_event_listener_with_options(
        target,
        ev::wheel,
        move |ev| feed(&ev, surface(), axis, inertia, enabled),
        UseEventListenerOptions::default().passive(false),
    );
    drive(surface, inertia, enabled);
}

/// Smooth wheel scrolling for the whole document.
pub fn use_window_smooth_scroll(enabled: Signal<bool>) {
    let inertia = StoredValue::new(Inertia::default());
    let surface = || Some(Surface::Window);

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |ev| feed(&ev, surface(), Axis::Vertical, inertia, enabled),
        UseEventListenerOptions::default().passive(false),
    );
    drive(surface, inertia, enabled);
}
