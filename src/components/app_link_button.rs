//! Deep link to the companion app.

use leptos::prelude::*;

use crate::state::popup::LinkNavigation;

/// Anchor bound to `link`. `on_click` decides whether the browser's own
/// navigation still happens.
#[component]
pub fn AppLinkButton(
    #[prop(into)] link: Signal<String>,
    on_click: Callback<(), LinkNavigation>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let on_anchor_click = move |ev: leptos::ev::MouseEvent| {
        if on_click.run(()) == LinkNavigation::Suppress {
            ev.prevent_default();
        }
    };

    view! {
        <a
            class=format!("app-link {class}")
            href=move || link.get()
            target="_blank"
            rel="noopener"
            on:click=on_anchor_click
        >
            <span class="app-link__icon" aria-hidden="true">"↗"</span>
            <span class="app-link__label">{children()}</span>
        </a>
    }
}
