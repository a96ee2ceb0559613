//! Global toast host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the app shell next to the routed outlet. Components call
//! [`notify`] with the shell's toast signal instead of rendering their own
//! notification UI.

use leptos::prelude::*;

use crate::state::shell::use_shell;
use crate::state::toast::{Toast, ToastKind, ToastState};

/// Time a toast stays up before it dismisses itself.
pub const TOAST_TTL_MS: u64 = 4_000;

/// Queue a toast and schedule its auto-dismiss.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_shell().toasts;

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
