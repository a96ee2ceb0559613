//! User avatar button with a small account menu.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::ProviderAccess;
use crate::state::shell::use_shell;
use crate::util::appearance::{Appearance, AppearanceElement};

#[component]
pub fn UserButton(appearance: Appearance) -> impl IntoView {
    let shell = use_shell();
    let avatar_style = appearance.style_for(AppearanceElement::UserButtonAvatarBox);
    let open = RwSignal::new(false);
    let user = move || shell.current_user();

    let on_sign_out = Callback::new(move |()| {
        open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_out().await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/features");
                    }
                }
                Err(e) => {
                    log::warn!("sign out failed: {e}");
                    super::toaster::notify(
                        shell.toasts,
                        crate::state::toast::ToastKind::Error,
                        format!("Could not sign out: {e}"),
                    );
                }
            }
        });
    });

    view! {
        <div class="user-button">
            <button
                class="user-button__trigger"
                aria-label="Open user menu"
                aria-haspopup="menu"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="user-button__avatar" style=avatar_style>
                    {move || match user() {
                        Some(User { avatar_url: Some(url), name, .. }) => {
                            view! { <img class="user-button__image" src=url alt=name/> }.into_any()
                        }
                        Some(user) => {
                            view! { <span class="user-button__initials">{user.initials()}</span> }.into_any()
                        }
                        None => view! { <span class="user-button__initials">"?"</span> }.into_any(),
                    }}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="user-button__menu" role="menu">
                    {move || {
                        user()
                            .map(|u| {
                                view! {
                                    <p class="user-button__name">{u.name}</p>
                                    <p class="user-button__email">{u.email.unwrap_or_default()}</p>
                                }
                            })
                    }}
                    <button class="user-button__item" role="menuitem" on:click=move |_| on_sign_out.run(())>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
