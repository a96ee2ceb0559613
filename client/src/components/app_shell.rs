//! Provider composition and readiness gate around all routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppShell` is the parent route of every page, so it mounts once per page
//! load and survives navigations. It fetches the provider bootstrap, keeps
//! the loading boundary up until the gate leaves `Initializing`, and then
//! mounts the routed outlet together with the toast and modal hosts.
//!
//! ERROR HANDLING
//! ==============
//! A failed bootstrap is terminal for the session: the shell renders a
//! full-page error with a reload action and no retry.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::loading::Loading;
use super::modal_host::ModalHost;
use super::toaster::Toaster;
use crate::state::readiness::ShellPhase;
use crate::state::shell::use_shell;
use crate::util::viewport::track_viewport_width;

#[component]
pub fn AppShell() -> impl IntoView {
    let shell = use_shell();
    track_viewport_width(shell.ui);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_bootstrap().await;
        shell.apply_bootstrap(result);
    });

    let phase = Memo::new(move |_| shell.gate.with(|gate| gate.phase().clone()));

    view! {
        <div class="app-shell">
            {move || match phase.get() {
                ShellPhase::Initializing => view! { <Loading/> }.into_any(),
                ShellPhase::Ready => {
                    view! {
                        <Outlet/>
                        <Toaster/>
                        <ModalHost/>
                    }
                        .into_any()
                }
                ShellPhase::Failed(reason) => view! { <ShellError reason=reason/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ShellError(reason: String) -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <div class="shell-error" role="alert">
            <h1>"Something went wrong"</h1>
            <p class="shell-error__reason">{reason}</p>
            <button class="btn btn--primary" on:click=on_reload>
                "Reload"
            </button>
        </div>
    }
}
