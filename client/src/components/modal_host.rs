//! Global modal host and the dialogs it renders.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::toaster::notify;
use crate::net::types::Organization;
use crate::state::modal::{ModalKind, ModalState, invite_link};
use crate::state::shell::use_shell;
use crate::state::toast::ToastKind;

#[cfg(test)]
#[path = "modal_host_test.rs"]
mod modal_host_test;

/// Renders whichever modal is open in the shell's modal slot.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_shell().modal;
    let on_close = Callback::new(move |()| modal.update(ModalState::close));

    view! {
        {move || {
            modal
                .get()
                .current()
                .cloned()
                .map(|kind| match kind {
                    ModalKind::InviteMembers { organization } => {
                        view! { <InviteMembersDialog organization=organization on_close=on_close/> }
                    }
                })
        }}
    }
}

/// Toast to show once a clipboard write has settled.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn copy_feedback<E>(written: Result<(), E>) -> (ToastKind, &'static str) {
    match written {
        Ok(()) => (ToastKind::Success, "Invite link copied"),
        Err(_) => (ToastKind::Error, "Could not copy the invite link"),
    }
}

fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
fn InviteMembersDialog(organization: Organization, on_close: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let toasts = use_shell().toasts;
    let link = invite_link(&page_origin(), &organization);
    let copy_link = link.clone();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                let (kind, message) = copy_feedback(Err(()));
                notify(toasts, kind, message);
                return;
            };
            let write = window.navigator().clipboard().write_text(&copy_link);
            leptos::task::spawn_local(async move {
                let written = wasm_bindgen_futures::JsFuture::from(write)
                    .await
                    .map(|_| ())
                    .inspect_err(|e| log::warn!("clipboard write rejected: {e:?}"));
                let (kind, message) = copy_feedback(written);
                notify(toasts, kind, message);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &copy_link;
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--invite"
                on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Invite members"</h2>
                <p class="dialog__subtitle">
                    "Share this link to bring teammates into " <strong>{organization.name}</strong> "."
                </p>
                <div class="dialog__link-box">
                    <code class="dialog__link-text">{link}</code>
                    <button class="btn" on:click=on_copy title="Copy invite link">
                        "Copy link"
                    </button>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}
