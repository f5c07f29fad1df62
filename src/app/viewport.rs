use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::dom::viewport_width;
use crate::layout::Breakpoint;

/// Client-measured viewport width. Unmeasured (server render, first frame) reads as
/// [`Breakpoint::Regular`].
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: ReadSignal<Option<f64>>,
}

impl Viewport {
    pub fn breakpoint(&self) -> Breakpoint {
        self.width
            .get()
            .map(Breakpoint::from_width)
            .unwrap_or_default()
    }

    pub fn is_compact(&self) -> bool {
        self.breakpoint().is_compact()
    }

    pub fn is_measured(&self) -> bool {
        self.width.get().is_some()
    }
}

pub fn use_viewport() -> Viewport {
    let (width, set_width) = signal(None::<f64>);

    let measure = move || set_width.set(viewport_width());

    Effect::new(move |_| measure());
    let _ = use_event_listener(use_window(), ev::resize, move |_| measure());

    Viewport { width }
}
