//! Authentication status dialog.
//!
//! ARCHITECTURE
//! ============
//! Layout decisions come from `DialogLayout`, recomputed whenever an input
//! signal changes. The popup opened from the mobile app link lives in a
//! `PopupLifecycle` owned by this component; the URL effect, the status effect
//! and unmount each feed it and it decides whether to release.

use leptos::prelude::*;

#[cfg(test)]
#[path = "status_dialog_test.rs"]
mod status_dialog_test;

use crate::components::app_link_button::AppLinkButton;
use crate::components::dialog::Dialog;
use crate::components::pending_pulser::PendingPulser;
use crate::components::qr_code::QrCode;
use crate::config::translations::TranslationTable;
use crate::config::ui_options::UiOptions;
use crate::state::popup::{LinkNavigation, PopupLifecycle};
use crate::state::status_dialog::{DeviceKind, DialogBody, DialogLayout, DisplayStatus, QrCodeToggle};
use crate::util::device::detect_device;
use crate::util::popup_window::{BrowserPopups, BrowserWindow};

/// Padlock mark shown next to the title when no QR code is visible.
pub const DEFAULT_LOGO_SRC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
     viewBox='0 0 24 24' fill='none' stroke='%23262626' stroke-width='2'%3E%3Crect x='4' y='11' \
     width='16' height='10' rx='2'/%3E%3Cpath d='M8 11V7a4 4 0 0 1 8 0v4'/%3E%3C/svg%3E";

/// Status dialog for an out-of-band login flow.
///
/// Without an explicit `device` the dialog renders the desktop variant first
/// and switches after mount if the user agent is mobile.
#[component]
pub fn StatusDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] status_message: Signal<String>,
    #[prop(into)] status_type: Signal<DisplayStatus>,
    #[prop(into)] authentication_url: Signal<Option<String>>,
    #[prop(optional, into)] always_show_qr_code: Option<Signal<bool>>,
    #[prop(optional)] device: Option<DeviceKind>,
    #[prop(optional)] translations: TranslationTable,
    #[prop(optional)] ui_options: UiOptions,
    #[prop(into, optional)] logo_src: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let always_show_qr_code = always_show_qr_code.unwrap_or(Signal::stored(false));
    let user_show_qr_code = RwSignal::new(false);

    // Server render and first hydrated render must agree, so an undetected
    // device starts as desktop and is refined after mount.
    let device_kind = RwSignal::new(initial_device(device));
    if device.is_none() {
        Effect::new(move || device_kind.set(detect_device()));
    }

    let popup = StoredValue::new_local(PopupLifecycle::<BrowserWindow>::new(
        authentication_url.get_untracked(),
        status_type.get_untracked(),
    ));

    let layout = Memo::new(move |_| {
        let qr = QrCodeToggle {
            always_show: always_show_qr_code.get(),
            user_show: user_show_qr_code.get(),
        };
        let device = device_kind.get();
        authentication_url.with(|url| DialogLayout::resolve(url.as_deref(), status_type.get(), qr, device))
    });
    let body = Memo::new(move |_| layout.with(|l| l.body.clone()));

    Effect::new(move || {
        authentication_url.with(|url| {
            popup.update_value(|lifecycle| {
                lifecycle.observe_url(url.as_deref());
            });
        });
    });

    Effect::new(move || {
        let status = status_type.get();
        popup.update_value(|lifecycle| {
            lifecycle.observe_status(status);
        });
    });

    on_cleanup(move || {
        popup.try_update_value(|lifecycle| {
            lifecycle.teardown();
        });
    });

    let on_app_link_click = Callback::new(move |()| {
        let url = authentication_url.get_untracked();
        popup
            .try_update_value(|lifecycle| lifecycle.open_app_link(&BrowserPopups, url.as_deref()))
            .unwrap_or(LinkNavigation::Proceed)
    });
    let on_toggle = move |_| user_show_qr_code.update(|show| *show = !*show);
    let on_dismiss = Callback::new(move |()| {
        if let Some(on_close) = on_close {
            on_close.run(());
        }
    });

    let common = translations.status_dialog.common.clone();
    let logo_src = logo_src.unwrap_or_else(|| DEFAULT_LOGO_SRC.to_owned());
    let qr_foreground = ui_options.qr_code_foreground_color.clone();
    let qr_error_foreground = ui_options.qr_code_error_foreground_color.clone();
    let close_button_title = translations.dialog.close_button_title.clone();

    let main_block = move || match body.get() {
        DialogBody::TitleAndLogo => {
            let logo_src = logo_src.clone();
            let logo_alt = common.logo_alt_text.clone();
            view! {
                <div class="status-dialog__header">
                    <p class="status-dialog__title">{move || title.get()}</p>
                    <img class="status-dialog__logo" src=logo_src alt=logo_alt/>
                </div>
            }
            .into_any()
        }
        DialogBody::QrCode { data } => {
            let prompt = common.qr_code_prompt.clone();
            view! {
                <div class="status-dialog__qr">
                    <QrCode
                        class="status-dialog__qr-code"
                        data=data
                        foreground=qr_foreground.clone()
                        error_foreground=qr_error_foreground.clone()
                    />
                    <p class="status-dialog__qr-code-prompt">{prompt}</p>
                </div>
            }
            .into_any()
        }
        DialogBody::AppLink { link } => {
            let label = common.app_link.clone();
            view! {
                <div class="status-dialog__app">
                    <AppLinkButton class="status-dialog__app-link" link=link on_click=on_app_link_click>
                        {label}
                    </AppLinkButton>
                </div>
            }
            .into_any()
        }
    };

    let toggle_button = move || {
        layout.with(|l| l.toggle).map(|label| {
            let text = translations.toggle_label(label).to_owned();
            view! {
                <button class="status-dialog__qr-toggler" on:click=on_toggle>
                    {text}
                </button>
            }
        })
    };

    view! {
        <Dialog
            class="status-dialog"
            on_dismiss=on_dismiss
            show_close_button=true
            close_button_title=close_button_title
            ui_options=ui_options
        >
            {main_block}
            <div class=move || status_type.get().message_class()>
                {move || status_message.get()}
                {move || {
                    layout
                        .with(|l| l.pending_indicator)
                        .then(|| view! { <PendingPulser class="status-dialog__pulser"/> })
                }}
            </div>
            {toggle_button}
        </Dialog>
    }
}

/// Device kind for the first render. Must not depend on the environment so
/// server and hydrated client produce the same markup.
pub fn initial_device(explicit: Option<DeviceKind>) -> DeviceKind {
    explicit.unwrap_or_default()
}
