//! Organization switcher widget backed by the identity provider.
//!
//! Lists organizations only; there is no personal-account entry.

use leptos::prelude::*;

use crate::net::types::Organization;
use crate::state::shell::use_shell;
use crate::util::appearance::{Appearance, AppearanceElement};

#[component]
pub fn OrganizationSwitcher(appearance: Appearance) -> impl IntoView {
    let shell = use_shell();
    let root_style = appearance.style_for(AppearanceElement::RootBox);
    let trigger_style = appearance.style_for(AppearanceElement::OrganizationSwitcherTrigger);

    let organizations = move || shell.session.with(|s| s.session.organizations.clone());
    let active_id = move || {
        shell
            .session
            .with(|s| s.session.active_organization_id.clone().unwrap_or_default())
    };

    let on_change = move |ev| {
        let organization_id = event_target_value(&ev);
        if organization_id.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::switch_organization(&organization_id).await {
                Ok(session) => shell.session.update(|s| s.session = session),
                Err(e) => {
                    log::warn!("organization switch failed: {e}");
                    super::toaster::notify(
                        shell.toasts,
                        crate::state::toast::ToastKind::Error,
                        format!("Could not switch organization: {e}"),
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = organization_id;
    };

    view! {
        <div class="org-switcher" style=root_style>
            <select
                class="org-switcher__trigger"
                style=trigger_style
                aria-label="Switch organization"
                prop:value=active_id
                on:change=on_change
            >
                <option value="" disabled=true selected=move || active_id().is_empty()>
                    "Select organization"
                </option>
                <For
                    each=organizations
                    key=|org| org.id.clone()
                    children=move |org: Organization| {
                        view! { <option value=org.id>{org.name}</option> }
                    }
                />
            </select>
        </div>
    }
}
