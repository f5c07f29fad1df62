use leptos::prelude::*;
use leptos_router::components::*;

use crate::catalog::Project;
use crate::layout::carousel::{card_style, lock_style};

#[component]
pub fn Card(project: Project, rotation: f64, #[prop(into)] compact: Signal<bool>) -> impl IntoView {
    let href = project.href();
    let class = format!(
        "relative flex-shrink-0 md:w-[300px] w-full md:h-[450px] aspect-[2/3] md:aspect-auto rounded-3xl p-8 flex flex-col justify-between transition-transform duration-700 ease-in-out md:hover:scale-[1.02] md:hover:rotate-[var(--hover-rotate)] hover:z-10 overflow-hidden {}",
        project.text_class()
    );
    let lock = project.protected.then(|| {
        view! {
            <div
                class="absolute top-6 right-6 z-10 w-6 h-6 opacity-60"
                style=lock_style(project.icon_color.as_deref()).to_string()
            />
        }
    });
    let style = {
        let project = project.clone();
        move || card_style(&project, rotation, compact.get()).to_string()
    };

    view! {
        <A
            href=href
            attr:class="block outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-blue-500 rounded-3xl group"
        >
            <div class=class style=style data-card=project.slug.clone()>
                <div class="relative z-10 flex flex-col gap-[4px]">
                    <h3 class="text-3xl font-medium tracking-[-0.5px]">{project.title.clone()}</h3>
                    <p class="text-sm opacity-80 font-normal">{project.category.clone()}</p>
                </div>
                {lock}
            </div>
        </A>
    }
}
