use std::time::Duration;

use leptos::{either::EitherOf3, ev, html, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_resize_observer, use_window,
    UseEventListenerOptions,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::dom::{apply_style, rect, set_style_property, viewport_height};
use super::gate::PasswordGate;
use super::smooth_scroll::use_window_smooth_scroll;
use super::viewport::use_viewport;
use super::NotFound;
use crate::catalog::{Project, CATALOG};
use crate::layout::sidebar::{
    breadcrumb_opacity, entrance_style, gallery_style, sidebar_style, SidebarMeasure,
    SidebarStyle,
};
use crate::layout::StyleDecl;

const ENTRY_DELAY: Duration = Duration::from_millis(100);
const PLACEHOLDER_TILES: usize = 3;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match CATALOG.find(&slug()) {
        Ok(project) if project.protected => {
            let title = project.title.clone();
            let slug = project.slug.clone();
            let project = project.clone();
            EitherOf3::A(view! {
                <Title text=title.clone() />
                <PasswordGate slug title>
                    <ProjectDetailContent project=project.clone() />
                </PasswordGate>
            })
        }
        Ok(project) => {
            let project = project.clone();
            EitherOf3::B(view! {
                <Title text=project.title.clone() />
                <ProjectDetailContent project />
            })
        }
        Err(e) => {
            log::debug!("{e}");
            EitherOf3::C(view! { <NotFound /> })
        }
    }
}

/// Paragraphs and credits of one project, shared by the desktop sidebar and
/// the stacked mobile layout.
#[component]
fn ProjectCopy(project: Project, compact: bool) -> impl IntoView {
    let (text, meta) = if compact {
        ("text-[16px]", "text-[16px]")
    } else {
        ("text-base", "text-[13px]")
    };
    view! {
        <div class="max-w-md flex flex-col gap-4">
            {project
                .paragraphs()
                .into_iter()
                .map(|p| view! { <p class=format!("leading-relaxed {text} text-black")>{p}</p> })
                .collect_view()}
        </div>
        <div class=format!("flex flex-col gap-1 {meta} text-black")>
            {project
                .awards
                .map(|awards| {
                    view! {
                        <div class="opacity-50">
                            <span>"Awards: "</span>
                            <span class="leading-relaxed">{awards}</span>
                        </div>
                    }
                })}
            {project
                .designed_at
                .map(|studio| {
                    view! {
                        <div class="opacity-50">
                            <span>"Designed at: "</span>
                            <span>{studio}</span>
                        </div>
                    }
                })}
        </div>
    }
}

fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a, button").ok().flatten())
        .is_some()
}

/// Detail page: breadcrumb, description column and the image gallery.
///
/// On wide layouts the description column rides along with the gallery from
/// the golden-ratio point and pins to the bottom of the screen once it would
/// otherwise scroll past it. Positioning is written straight onto the element
/// on every scroll, resize and content resize.
#[component]
pub fn ProjectDetailContent(project: Project) -> impl IntoView {
    let viewport = use_viewport();
    let compact = Signal::derive(move || viewport.is_compact());
    let (loaded, set_loaded) = signal(false);

    let breadcrumb_ref = NodeRef::<html::Div>::new();
    let column_ref = NodeRef::<html::Div>::new();
    let sidebar_ref = NodeRef::<html::Div>::new();
    let desktop_copy_ref = NodeRef::<html::Div>::new();
    let mobile_copy_ref = NodeRef::<html::Div>::new();
    let gallery_ref = NodeRef::<html::Div>::new();

    use_window_smooth_scroll(Signal::derive(move || !compact.get()));

    Effect::new(move |_| {
        match set_timeout_with_handle(move || set_loaded.set(true), ENTRY_DELAY) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("entry timer unavailable: {e:?}");
                set_loaded.set(true);
            }
        }
    });

    let measure = move || -> Option<SidebarMeasure> {
        let gallery = gallery_ref.get_untracked()?;
        let sidebar = sidebar_ref.get_untracked()?;
        let column = column_ref.get_untracked()?;
        let bounds = rect(&gallery);
        Some(SidebarMeasure {
            viewport_height: viewport_height()?,
            container_top: bounds.top(),
            container_height: bounds.height(),
            sidebar_height: sidebar.offset_height() as f64,
            column_width: rect(&column).width(),
        })
    };

    let place_sidebar = move || {
        if compact.get_untracked() {
            return;
        }
        if let Some(sidebar) = sidebar_ref.get_untracked() {
            apply_style(&sidebar, &sidebar_style(measure()).into());
        }
    };

    let fade_breadcrumb = move || {
        let Some(breadcrumb) = breadcrumb_ref.get_untracked() else {
            return;
        };
        let copy = if compact.get_untracked() {
            mobile_copy_ref.get_untracked()
        } else {
            desktop_copy_ref.get_untracked()
        };
        let opacity = copy
            .map(|copy| breadcrumb_opacity(rect(&breadcrumb).bottom(), rect(&copy).top()))
            .unwrap_or(1.0);
        set_style_property(&breadcrumb, "opacity", &opacity.to_string());
    };

    let relayout = move || {
        place_sidebar();
        fade_breadcrumb();
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| relayout(),
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| relayout());
    let _ = use_resize_observer(gallery_ref, move |_, _| relayout());
    let _ = use_resize_observer(sidebar_ref, move |_, _| relayout());
    Effect::new(move |_| {
        // re-run once the layout flips between stacked and two columns
        compact.track();
        loaded.track();
        relayout();
    });

    let navigate = use_navigate();
    let go_home = move || navigate("/", Default::default());

    let _ = use_event_listener(use_window(), ev::keydown, {
        let go_home = go_home.clone();
        move |e| {
            if e.key() == "Escape" {
                go_home();
            }
        }
    });

    let on_background = move |ev: ev::MouseEvent| {
        if !is_control(ev.target()) {
            go_home();
        }
    };

    let title = project.title.clone();
    let gallery = if project.gallery.is_empty() {
        (1..=PLACEHOLDER_TILES)
            .map(|n| {
                view! {
                    <div class="w-full aspect-[3/2] bg-zinc-100 rounded-[8px] flex items-center justify-center text-black">
                        {format!("Image {n}")}
                    </div>
                }
                .into_any()
            })
            .collect_view()
    } else {
        project
            .gallery
            .iter()
            .enumerate()
            .map(|(i, src)| {
                view! {
                    <div class="w-full aspect-[3/2] rounded-[8px] overflow-hidden relative">
                        <img
                            src=src.clone()
                            alt=format!("{title} gallery {}", i + 1)
                            class="absolute inset-0 w-full h-full object-cover"
                            loading=if i == 0 { "eager" } else { "lazy" }
                        />
                    </div>
                }
                .into_any()
            })
            .collect_view()
    };

    let copy = StoredValue::new(project.clone());
    let sidebar_initial = StyleDecl::from(SidebarStyle::default()).to_string();

    view! {
        <div
            class=move || {
                let height = if compact.get() { "min-h-[100dvh]" } else { "min-h-screen" };
                format!(
                    "flex flex-col md:flex-row {height} bg-white text-black font-sans selection:bg-black selection:text-white relative",
                )
            }
            style="cursor: url('/close.svg') 16 16, auto; overflow-x: hidden;"
            on:click=on_background
        >
            <div
                node_ref=breadcrumb_ref
                class="fixed left-0 top-0 w-full md:w-1/4 p-10 md:p-[48px] z-30 transition-opacity duration-300"
            >
                <div class="flex items-center gap-1 text-[16px] md:text-sm">
                    <A href="/" attr:class="custom-link font-normal">
                        "Projects"
                    </A>
                    <span>"/"</span>
                    <span class="truncate">{project.title.clone()}</span>
                </div>
            </div>

            <Show when=move || !compact.get()>
                <div node_ref=column_ref class="relative w-1/4 shrink-0 hidden md:block">
                    <div node_ref=sidebar_ref style=sidebar_initial.clone()>
                        <div
                            node_ref=desktop_copy_ref
                            class="flex flex-col gap-8 transition-all"
                            style=move || entrance_style(loaded.get(), false).to_string()
                        >
                            <ProjectCopy project=copy.get_value() compact=false />
                        </div>
                    </div>
                </div>
            </Show>

            <div class="w-full flex flex-col md:flex-row md:w-3/4">
                <Show when=move || compact.get()>
                    <div
                        node_ref=mobile_copy_ref
                        class="w-full p-10 flex flex-col gap-8 transition-all"
                        style=move || entrance_style(loaded.get(), true).to_string()
                    >
                        <ProjectCopy project=copy.get_value() compact=true />
                    </div>
                </Show>

                <div
                    node_ref=gallery_ref
                    class="w-full p-[12px] transition-opacity mt-4 md:mt-0"
                    style=move || gallery_style(loaded.get(), compact.get()).to_string()
                >
                    <div class="flex flex-col gap-[12px]">{gallery}</div>
                </div>
            </div>
        </div>
    }
}

