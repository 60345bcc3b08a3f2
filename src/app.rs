//! Demo application hosting the status dialog.
//!
//! Drives the dialog through a fake authentication flow so every state can be
//! exercised by hand: rotating URLs, success, failure and dismissal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate ships no server binary. `shell` is the document an embedding
//! server renders (e.g. through `leptos_axum::render_app_to_stream`) with the
//! `ssr` feature; the WASM build's `hydrate()` entry then hydrates `App` on
//! that page. Without such a server, mount `App` client-side instead.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::status_dialog::StatusDialog;
use crate::state::status_dialog::DisplayStatus;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

const DEMO_AUTH_ORIGIN: &str = "https://auth.example/session";

/// HTML shell for an embedding server's SSR + hydration route.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn demo_url(attempt: u32) -> String {
    format!("{DEMO_AUTH_ORIGIN}/{attempt}")
}

fn demo_message(status: DisplayStatus) -> &'static str {
    match status {
        DisplayStatus::Waiting => "Waiting for confirmation on your phone",
        DisplayStatus::Success => "Signed in",
        DisplayStatus::Error => "Sign-in failed. Try again.",
    }
}

/// Root demo component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let open = RwSignal::new(true);
    let attempt = RwSignal::new(1_u32);
    let status = RwSignal::new(DisplayStatus::Waiting);
    let url = RwSignal::new(Some(demo_url(1)));

    let restart = move |_| {
        attempt.update(|n| *n += 1);
        url.set(Some(demo_url(attempt.get_untracked())));
        status.set(DisplayStatus::Waiting);
        open.set(true);
    };
    let rotate_url = move |_| {
        attempt.update(|n| *n += 1);
        url.set(Some(demo_url(attempt.get_untracked())));
    };
    let clear_url = move |_| url.set(None);
    let succeed = move |_| status.set(DisplayStatus::Success);
    let fail = move |_| status.set(DisplayStatus::Error);

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-status-dialog.css"/>
        <Title text="Authentication status"/>

        <main class="demo">
            <div class="demo__controls">
                <button class="btn" on:click=restart>"Restart"</button>
                <button class="btn" on:click=rotate_url>"New URL"</button>
                <button class="btn" on:click=clear_url>"Clear URL"</button>
                <button class="btn" on:click=succeed>"Succeed"</button>
                <button class="btn" on:click=fail>"Fail"</button>
            </div>
            <Show when=move || open.get() fallback=|| view! { <p class="demo__closed">"Dialog closed."</p> }>
                <StatusDialog
                    title={"Sign in with your phone".to_owned()}
                    status_message=Signal::derive(move || demo_message(status.get()).to_owned())
                    status_type=status
                    authentication_url=url
                    on_close=Callback::new(move |()| open.set(false))
                />
            </Show>
        </main>
    }
}
