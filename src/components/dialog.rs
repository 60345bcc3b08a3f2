//! Generic modal container with backdrop and close affordance.

use leptos::prelude::*;

use crate::config::ui_options::UiOptions;

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Keys that dismiss the dialog while it has focus.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Modal shell. Backdrop click, Escape and the close button each invoke
/// `on_dismiss` once per gesture. The dialog takes focus on mount so Escape
/// works without a prior click.
#[component]
pub fn Dialog(
    on_dismiss: Callback<()>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] show_close_button: bool,
    #[prop(into)] close_button_title: String,
    #[prop(optional)] ui_options: UiOptions,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog_el) = dialog_ref.get() {
                let _ = dialog_el.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dialog_ref;
        }
    });

    let on_backdrop = move |_| on_dismiss.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_dismiss.run(());
        }
    };

    let close_button = show_close_button.then(|| {
        view! {
            <button class="dialog__close" title=close_button_title on:click=move |_| on_dismiss.run(())>
                "✕"
            </button>
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=dialog_ref
                class=format!("dialog {class}")
                style=ui_options.css_variables()
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                {close_button}
                {children()}
            </div>
        </div>
    }
}
