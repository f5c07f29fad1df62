use leptos::{html, prelude::*};
use leptos_use::use_resize_observer;

use crate::layout::chrome::ChromeState;

fn toggle_slot_class(state: ChromeState) -> String {
    let display = if state.shows_toggle() { "flex" } else { "hidden" };
    let width = if state.compact { "w-auto" } else { "md:w-[8.33%]" };
    let place = if state.compact && state.about_open {
        "absolute top-[32px] right-[24px]"
    } else {
        "items-end self-center"
    };
    format!("{display} flex-col {width} {place}")
}

fn about_link_class(state: ChromeState) -> &'static str {
    if state.shows_about_link() {
        "custom-link text-left mt-6 font-normal text-[var(--fs-16)] w-fit transition-opacity duration-300 opacity-100"
    } else {
        "custom-link text-left mt-6 font-normal text-[var(--fs-16)] w-fit transition-opacity duration-300 opacity-0 pointer-events-none"
    }
}

/// Name, credentials and the About toggle. Sits at the bottom of the screen on
/// desktop and doubles as the page header on mobile.
#[component]
pub fn Chrome(
    #[prop(into)] about_open: Signal<bool>,
    #[prop(into)] compact: Signal<bool>,
    #[prop(into)] loaded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    /// Identity block whose opacity follows the scroll position.
    identity_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let (footer_height, set_footer_height) = signal(0.0);

    let _ = use_resize_observer(footer_ref, move |_, _| {
        if let Some(el) = footer_ref.get_untracked() {
            set_footer_height.set(el.offset_height() as f64);
        }
    });

    let state = move || ChromeState {
        about_open: about_open.get(),
        compact: compact.get(),
        loaded: loaded.get(),
    };

    view! {
        <footer
            node_ref=footer_ref
            class=move || state().footer_class()
            style=move || state().footer_style(footer_height.get()).to_string()
        >
            <div class=move || {
                if compact.get() {
                    "flex items-start justify-between w-full pointer-events-auto text-[var(--fs-16)] transition-colors duration-300"
                } else {
                    "flex items-end w-full pointer-events-auto text-[var(--fs-16)] transition-colors duration-300"
                }
            }>
                <div node_ref=identity_ref class="flex flex-col md:flex-row w-full md:w-[91.66%]">
                    <div class=move || {
                        if compact.get() {
                            "flex flex-col w-auto"
                        } else {
                            "flex flex-col md:flex-row md:w-[54.54%] items-end"
                        }
                    }>
                        <div
                            class="flex flex-col w-auto"
                            style=move || {
                                state().identity_style().map(|s| s.to_string()).unwrap_or_default()
                            }
                        >
                            <span class="font-medium">"Fernando Paravela"</span>
                            <span class="font-normal">"Experience Design Director"</span>
                        </div>
                        <Show when=move || compact.get()>
                            <button
                                on:click=move |_| on_toggle.run(())
                                class=move || about_link_class(state())
                                style="color: #000000;"
                            >
                                "About"
                            </button>
                        </Show>
                        <div class=move || {
                            if compact.get() {
                                "hidden"
                            } else {
                                "hidden min-[1080px]:flex flex-col w-auto mx-auto"
                            }
                        }>
                            <span class="font-medium">"20+ years of design"</span>
                            <span class="font-normal">"Itaú, Work & Co, Accenture Song, VML"</span>
                        </div>
                    </div>
                    <div class=move || {
                        if compact.get() { "hidden" } else { "flex flex-col md:w-[45.45%]" }
                    }>
                        <div class="flex flex-col min-[1080px]:hidden">
                            <span class="font-medium">"20+ years of design"</span>
                            <span class="font-normal">"Itaú, Work & Co, Accenture Song, VML"</span>
                        </div>
                        <div class="hidden min-[1080px]:flex flex-col">
                            <span class="font-medium">"Recognition"</span>
                            <span class="font-normal">"iF, Red Dot, Webby Awards, and others"</span>
                        </div>
                    </div>
                </div>
                <div class=move || toggle_slot_class(state())>
                    <button
                        on:click=move |_| on_toggle.run(())
                        class="outline-none transition-all duration-300 ease-in-out hover:scale-110 active:scale-95 cursor-pointer block"
                        style=move || state().toggle_style().to_string()
                        aria-label="Toggle About"
                    >
                        <img src="/plus-close.svg" alt="Toggle About" class="w-[40px] h-[40px]" />
                    </button>
                </div>
            </div>
        </footer>
    }
}
