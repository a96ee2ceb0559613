//! Invite action for the active organization.

use leptos::prelude::*;

use crate::net::types::Organization;
use crate::state::modal::ModalKind;
use crate::state::shell::use_shell;

#[component]
pub fn InviteButton(organization: Organization) -> impl IntoView {
    let modal = use_shell().modal;
    let on_click = move |_| {
        let organization = organization.clone();
        modal.update(|m| m.open(ModalKind::InviteMembers { organization }));
    };

    view! {
        <button class="btn navbar__invite" on:click=on_click>
            "+ Invite members"
        </button>
    }
}
