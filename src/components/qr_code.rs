//! Scannable QR code for arbitrary string data.

use leptos::prelude::*;

use crate::util::qr_svg::render_qr_svg;

/// QR code drawn in `foreground`. Data that cannot be encoded renders an
/// error placeholder in `error_foreground` instead.
#[component]
pub fn QrCode(
    #[prop(into)] data: Signal<String>,
    #[prop(into)] foreground: String,
    #[prop(into)] error_foreground: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let markup = move || data.with(|d| render_qr_svg(d, &foreground));

    view! {
        <div class=format!("qr-code {class}")>
            {move || match markup() {
                Ok(svg) => view! { <div class="qr-code__image" inner_html=svg></div> }.into_any(),
                Err(e) => {
                    leptos::logging::warn!("{e}");
                    let style = format!("color:{error_foreground};");
                    view! {
                        <div class="qr-code__error" style=style role="img" aria-label="QR code unavailable">
                            "✕"
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
