use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener_with_options, UseEventListenerOptions};

use super::smooth_scroll::use_smooth_scroll;
use crate::layout::about::{overlay_style, ScrollContainer};
use crate::layout::inertia::Axis;
use crate::layout::GOLDEN_OFFSET_CSS;

const BIO: [&str; 3] = [
    "My work lies at the intersection of UX, Visual Design, and Brand Strategy. I aim to strategically combine these disciplines to create digital products that go beyond utility, building those additional layers of meaning and emotion that make people connect with brands and products on a deeper level.",
    "This approach lead to projects that were internationally recognized by awards such as the Brasil Design Award, UX Design Awards, Good Design Award, Latin America Design Awards, Bienal Iberoamericana de Diseño, CLAP Awards, Museu da Casa Brasileira and Awwwards.",
    "I am also deeply invested in the management aspect of the work. I've been scouting new talent, building teams, and mentoring younger professionals for several years now, always aiming to lead by example, with empathy and care.",
];

const LINKS: [(&str, &str); 3] = [
    ("oi@paravela.work", "mailto:oi@paravela.work"),
    ("Linkedin", "https://www.linkedin.com/in/paravela/"),
    ("Medium", "https://medium.com/@fernandoparavela"),
];

#[component]
fn SocialLinks(class: &'static str, link_class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {LINKS
                .iter()
                .map(|(label, href)| {
                    let external = !href.starts_with("mailto:");
                    view! {
                        <a
                            href=*href
                            target=external.then_some("_blank")
                            rel=external.then_some("noopener noreferrer")
                            class=link_class
                        >
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full screen biography that slides up over the gallery. Reports the scroll
/// offset of whichever element scrolls it so the page can fade its header.
#[component]
pub fn AboutContent(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] compact: Signal<bool>,
    #[prop(into)] on_scroll: Callback<f64>,
) -> impl IntoView {
    let overlay = NodeRef::<html::Div>::new();
    let pane = NodeRef::<html::Div>::new();
    let container = move || ScrollContainer::for_layout(compact.get_untracked());

    use_smooth_scroll(
        pane,
        Axis::Vertical,
        Signal::derive(move || visible.get() && !compact.get()),
    );

    let _ = use_event_listener_with_options(
        overlay,
        ev::scroll,
        move |_| {
            if container() != ScrollContainer::Overlay {
                return;
            }
            if let Some(el) = overlay.get_untracked() {
                on_scroll.run(el.scroll_top() as f64);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener_with_options(
        pane,
        ev::scroll,
        move |_| {
            if container() != ScrollContainer::Pane {
                return;
            }
            if let Some(el) = pane.get_untracked() {
                on_scroll.run(el.scroll_top() as f64);
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    view! {
        <div
            node_ref=overlay
            class=move || {
                if compact.get() {
                    "fixed inset-0 z-[50] transition-transform bg-[#000] text-white overflow-y-auto"
                } else {
                    "fixed inset-0 z-[50] transition-transform bg-[#000] text-white"
                }
            }
            style=move || overlay_style(visible.get()).to_string()
        >
            <div
                node_ref=pane
                class=move || {
                    if compact.get() {
                        "relative w-full no-scrollbar pointer-events-auto px-10 md:px-0"
                    } else {
                        "absolute h-full overflow-y-auto w-full no-scrollbar pointer-events-auto px-10 md:px-0"
                    }
                }
                style=format!("padding-top: {GOLDEN_OFFSET_CSS}; padding-bottom: 100px;")
            >
                <div class="flex flex-col md:flex-row w-full">
                    <div class="w-full md:w-[50%] hidden md:block"></div>
                    <div class="w-full md:w-[33.33%] flex flex-col gap-12 md:gap-[0.75em]">
                        <div class="md:hidden flex flex-col gap-8 text-white mb-4">
                            <div class="flex flex-col">
                                <span class="font-bold text-[16px]">"20+ years of design"</span>
                                <span class="opacity-70 text-[16px]">
                                    "Itaú, Work & Co, Accenture Song, VML"
                                </span>
                            </div>
                            <div class="flex flex-col">
                                <span class="font-bold text-[16px]">"Recognition"</span>
                                <span class="opacity-70 text-[16px]">
                                    "Webby Awards, iF, Red Dot, LAD Awards, and others"
                                </span>
                            </div>
                        </div>
                        <div class="flex flex-col gap-[0.75em]">
                            {BIO
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-[16px] md:text-[24px] leading-[1.5] tracking-tight text-white m-0">
                                            {*p}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <SocialLinks
                            class="flex flex-col md:hidden gap-4 text-[16px] text-white mt-12"
                            link_class="custom-link self-start"
                        />
                    </div>
                </div>
            </div>
            <SocialLinks
                class="hidden md:flex flex-row gap-8 text-[16px] text-white absolute bottom-[48px] left-[48px] z-50"
                link_class="custom-link"
            />
        </div>
    }
}
