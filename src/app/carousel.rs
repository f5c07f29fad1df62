use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener_with_options, UseEventListenerOptions};

use super::card::Card;
use super::dom::set_style_property;
use super::smooth_scroll::use_smooth_scroll;
use crate::catalog::Project;
use crate::layout::carousel::{
    arrange, container_style, gap_offset, gap_offset_value, wrapper_style, CardSlot,
};
use crate::layout::inertia::Axis;
use crate::layout::Breakpoint;

const SLOT_CLASS: &str = "w-full md:w-auto shrink-0 transition-all duration-700 ease-out";

fn container_class(compact: bool) -> &'static str {
    if compact {
        "w-full touch-pan-y no-scrollbar bg-zinc-50"
    } else {
        "w-full h-full md:overflow-x-auto overflow-y-auto md:overflow-y-hidden pointer-events-auto no-scrollbar bg-zinc-50"
    }
}

fn strip_class(compact: bool) -> &'static str {
    if compact {
        "flex flex-col md:flex-row items-center md:h-full p-[12px] gap-[12px] md:gap-0"
    } else {
        "flex flex-col md:flex-row items-center md:h-full p-0 md:pl-[33vw] md:pr-[96px] md:w-max gap-[12px] md:gap-0"
    }
}

/// Horizontal strip of project cards on desktop, a vertical stack on mobile.
#[component]
pub fn Carousel(
    projects: Vec<Project>,
    #[prop(into)] loaded: Signal<bool>,
    #[prop(into)] breakpoint: Signal<Breakpoint>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let compact = Signal::derive(move || breakpoint.get().is_compact());
    let slots = arrange(&projects);

    use_smooth_scroll(
        container,
        Axis::Horizontal,
        Signal::derive(move || !compact.get()),
    );

    let update_gap = move || {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let max_scroll = (el.scroll_width() - el.client_width()) as f64;
        if let Some(offset) = gap_offset(el.scroll_left() as f64, max_scroll) {
            set_style_property(&el, "--gap-offset", &gap_offset_value(offset));
        }
    };

    let _ = use_event_listener_with_options(
        container,
        ev::scroll,
        move |_| {
            if !compact.get_untracked() {
                update_gap();
            }
        },
        UseEventListenerOptions::default().passive(true),
    );
    Effect::new(move |_| {
        if !breakpoint.get().is_compact() {
            update_gap();
        }
    });

    view! {
        <div
            node_ref=container
            class=move || container_class(compact.get())
            style=move || container_style(breakpoint.get()).to_string()
        >
            <div class=move || strip_class(compact.get())>
                {slots
                    .into_iter()
                    .map(|CardSlot { index, rotation, project }| {
                        let class = if index == 0 {
                            SLOT_CLASS.to_string()
                        } else {
                            format!("{SLOT_CLASS} md:ml-[var(--card-gap)]")
                        };
                        view! {
                            <div
                                class=class
                                style=move || {
                                    wrapper_style(index, rotation, breakpoint.get(), loaded.get())
                                        .to_string()
                                }
                            >
                                <Card project rotation compact />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
