mod about;
mod card;
mod carousel;
mod chrome;
mod dom;
mod gate;
mod home;
mod project;
mod smooth_scroll;
mod viewport;

use home::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use project::ProjectPage;

pub const SITE_NAME: &str = "Paravela";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <meta
                    name="description"
                    content="Fernando Paravela, Experience Design Director. Selected projects."
                />
                <link rel="stylesheet" id="leptos" href="/pkg/paravela-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-zinc-50">
                <App />
            </body>
        </html>
    }
}

fn page_title(title: String) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{SITE_NAME} / {title}")
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=page_title />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects/:slug") view=ProjectPage />
            </Routes>
        </Router>
    }
}

/// Terminal view for unknown routes and slugs; answers 404 on the server.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not found" />
        <div class="flex flex-col min-h-screen items-center justify-center gap-6 bg-white text-black">
            <h1 class="text-[64px] md:text-[120px] leading-none tracking-[-4px]">"404"</h1>
            <A href="/" attr:class="custom-link text-[16px]">
                "Back to projects"
            </A>
        </div>
    }
}
