use leptos::{ev, prelude::*};
use leptos_router::components::*;

use crate::gate::{Access, GateState};

/// Checks a password attempt for a protected project. The secret never leaves
/// the server.
#[server]
pub async fn verify_password(slug: String, password: String) -> Result<Access, ServerFnError> {
    let config = crate::config::SiteConfig::global()
        .ok_or_else(|| ServerFnError::new("Site configuration not installed"))?;
    let access = config.gate.check(&password);
    tracing::info!(%slug, ?access, "password attempt");
    Ok(access)
}

const INPUT_CLASS: &str = "w-full text-center text-[64px] md:text-[220px] leading-none tracking-[-4px] outline-none bg-transparent placeholder:text-zinc-300";

/// Hides its children behind a single password prompt until the server grants
/// access. Nothing is remembered once the page goes away.
#[component]
pub fn PasswordGate(slug: String, title: String, children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(GateState::default());
    let verify = ServerAction::<VerifyPassword>::new();

    Effect::new(move |_| {
        let Some(result) = verify.value().get() else {
            return;
        };
        let access = result.unwrap_or_else(|e| {
            log::warn!("password check failed: {e}");
            Access::Denied
        });
        state.update(|s| s.resolve(access));
    });

    let slug = StoredValue::new(slug);
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.pending) {
            return;
        }
        let password = state.with_untracked(|s| s.input.clone());
        state.update(GateState::begin);
        verify.dispatch(VerifyPassword {
            slug: slug.get_value(),
            password,
        });
    };

    let prompt = move || {
        view! {
            <div class="min-h-screen bg-white text-black font-sans selection:bg-black selection:text-white">
                <div class="fixed left-0 top-0 p-[48px] z-10">
                    <div class="flex items-center gap-1 text-[16px]">
                        <A href="/" attr:class="underline hover:no-underline">
                            "Projects"
                        </A>
                        <span>"/"</span>
                        <span>{title.clone()}</span>
                    </div>
                </div>
                <div class="flex min-h-screen items-center justify-center">
                    <form on:submit=on_submit class="w-full">
                        <div class="relative flex justify-center">
                            <input
                                type="password"
                                placeholder="Password"
                                autofocus=true
                                aria-busy=move || state.with(|s| s.pending).to_string()
                                prop:value=move || state.with(|s| s.input.clone())
                                on:input=move |ev| state.update(|s| s.edit(event_target_value(&ev)))
                                class=move || format!("{INPUT_CLASS} {}", state.with(|s| s.tone().class()))
                            />
                        </div>
                    </form>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || state.with(|s| s.authenticated) fallback=prompt>
            {children()}
        </Show>
    }
}
