//! Pulsing dots shown while authentication is pending.

use leptos::prelude::*;

#[component]
pub fn PendingPulser(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <span class=format!("pending-pulser {class}") aria-hidden="true">
            <span class="pending-pulser__dot"></span>
            <span class="pending-pulser__dot"></span>
            <span class="pending-pulser__dot"></span>
        </span>
    }
}
