use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use super::about::AboutContent;
use super::carousel::Carousel;
use super::chrome::Chrome;
use super::dom::{set_body_scroll_locked, set_style_property, window_scroll_y};
use super::viewport::use_viewport;
use crate::catalog::CATALOG;
use crate::layout::chrome::ChromeState;
use crate::layout::home::{gallery_style, header_opacity, GalleryState};

const ENTRY_DELAY: Duration = Duration::from_millis(150);

/// Gallery page: owns the About toggle and wires chrome, strip and overlay.
#[component]
pub fn HomePage() -> impl IntoView {
    let viewport = use_viewport();
    let (about_open, set_about_open) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let identity_ref = NodeRef::<html::Div>::new();
    // last offset reported by the About overlay
    let about_scroll = StoredValue::new(0.0_f64);

    let breakpoint = Signal::derive(move || viewport.breakpoint());
    let compact = Signal::derive(move || viewport.is_compact());

    Effect::new(move |_| {
        match set_timeout_with_handle(move || set_loaded.set(true), ENTRY_DELAY) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("entry timer unavailable: {e:?}");
                set_loaded.set(true);
            }
        }
    });

    let fade_header = move |scroll_top: f64| {
        if let Some(el) = identity_ref.get_untracked() {
            set_style_property(&el, "opacity", &header_opacity(scroll_top).to_string());
        }
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            if !about_open.get_untracked() {
                fade_header(window_scroll_y());
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        if e.key() == "Escape" && about_open.get_untracked() {
            set_about_open.set(false);
        }
    });

    Effect::new(move |_| {
        let open = about_open.get();
        set_body_scroll_locked(open);
        if open {
            fade_header(about_scroll.get_value());
        } else if viewport.is_measured() {
            fade_header(window_scroll_y());
        }
    });
    #[cfg(feature = "hydrate")]
    on_cleanup(|| set_body_scroll_locked(false));

    let on_about_scroll = move |scroll_top: f64| {
        about_scroll.set_value(scroll_top);
        fade_header(scroll_top);
    };

    let gallery = move || {
        gallery_style(GalleryState {
            stable: viewport.is_measured(),
            loaded: loaded.get(),
            compact: compact.get(),
            about_open: about_open.get(),
        })
        .to_string()
    };

    let projects = CATALOG.projects().to_vec();

    view! {
        <Title text=move || if about_open.get() { "About".to_string() } else { String::new() } />
        <div class=move || {
            if compact.get() {
                "relative w-full min-h-[100dvh] font-sans bg-zinc-50"
            } else {
                "relative w-full h-screen overflow-hidden font-sans bg-zinc-50"
            }
        }>
            <main
                class=move || if compact.get() { "w-full h-auto touch-pan-y" } else { "w-full h-full no-scrollbar" }
                style=gallery
            >
                <Carousel projects loaded breakpoint />
            </main>

            <AboutContent visible=about_open compact on_scroll=on_about_scroll />

            <div class=move || {
                let state = ChromeState {
                    about_open: about_open.get(),
                    compact: compact.get(),
                    loaded: loaded.get(),
                };
                format!(
                    "fixed inset-0 pointer-events-none z-[60] transition-colors duration-[750ms] {}",
                    state.layer_class(),
                )
            }>
                <div class=move || {
                    if compact.get() {
                        let color = if about_open.get() { "text-white" } else { "text-black" };
                        format!("md:hidden absolute top-0 left-0 w-full pointer-events-auto transition-colors duration-[750ms] {color}")
                    } else {
                        "absolute inset-0 pointer-events-none".to_string()
                    }
                }>
                    <Chrome
                        about_open
                        compact
                        loaded
                        on_toggle=move |_| set_about_open.update(|open| *open = !*open)
                        identity_ref
                    />
                </div>
            </div>
        </div>
    }
}
